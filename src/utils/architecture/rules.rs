// layer rules protecting the domain

use super::types::LayerRule;

/// imports the haskell domain layer may never reach for
pub const HASKELL_DOMAIN_RULES: [LayerRule; 6] = [
    LayerRule {
        pattern: "import Effect",
        rule: "Domain MUST NOT import Effect (Inversion of Control)",
    },
    LayerRule {
        pattern: "import App",
        rule: "Domain MUST NOT import App (Circular Dependency)",
    },
    LayerRule {
        pattern: "import Workflow",
        rule: "Domain MUST NOT import Workflow (Layering)",
    },
    LayerRule {
        pattern: "import Network.HTTP",
        rule: "Domain MUST be pure (No HTTP)",
    },
    LayerRule {
        pattern: "import Database",
        rule: "Domain MUST be pure (No DB)",
    },
    LayerRule {
        pattern: "import System.IO",
        rule: "Domain MUST be pure (No System.IO)",
    },
];

/// imports the elm domain layer may never reach for
pub const ELM_DOMAIN_RULES: [LayerRule; 4] = [
    LayerRule {
        pattern: "import Http",
        rule: "Domain MUST be pure (No Http)",
    },
    LayerRule {
        pattern: "import Json.Decode",
        rule: "Domain MUST be pure (No Decoders - use Api/)",
    },
    LayerRule {
        pattern: "import Effect",
        rule: "Domain MUST NOT import Effect",
    },
    LayerRule {
        pattern: "import Pages",
        rule: "Domain MUST NOT import Pages",
    },
];
