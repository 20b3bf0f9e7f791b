use serde_json::{json, Value};

use crate::table::TokenTable;
use crate::validation::ValidationResult;

/// Raw form of the base token set shipped with the theme.
pub fn default_raw_tokens() -> Value {
    json!({
        "colors": {
            "white": "#FFFFFF",
            "primary": {
                "50": "#eff6ff",
                "100": "#dbeafe",
                "200": "#bfdbfe",
                "300": "#93c5fd",
                "400": "#60a5fa",
                "500": "#3b82f6",
                "600": "#2563eb",
                "700": "#1d4ed8",
                "800": "#1e40af",
                "900": "#1e3a8a"
            },
            "dark": {
                "50": "#E6E6E6",
                "100": "#A8A8A8",
                "200": "#515151",
                "300": "#1e3a8a",
                "400": "#64748B",
                "500": "#190906",
                "600": "#000000"
            },
            "secondary": {
                "50": "#f8fafc",
                "100": "#f1f5f9",
                "200": "#e2e8f0",
                "300": "#cbd5e1",
                "400": "#bfdbfe",
                "500": "#93c5fd",
                "600": "#1d4ed8",
                "700": "#334155",
                "800": "#1e293b",
                "900": "#0f172a"
            },
            "success": {
                "light": "#86efac",
                "DEFAULT": "#22c55e",
                "dark": "#15803d"
            },
            "warning": {
                "light": "#fde68a",
                "DEFAULT": "#f59e0b",
                "dark": "#b45309"
            },
            "danger": {
                "light": "#fca5a5",
                "DEFAULT": "#ef4444",
                "dark": "#b91c1c"
            }
        },
        "extend": {
            "boxShadow": {
                "card": "0px 0px 10px rgba(0, 0, 0, 0.05)"
            },
            "spacing": {
                "18": "4.5rem",
                "72": "18rem",
                "84": "21rem",
                "96": "24rem"
            },
            "borderRadius": {
                "4xl": "2rem",
                "5xl": "2.5rem"
            },
            "fontSize": {
                "xxs": "0.625rem"
            },
            "height": {
                "screen-50": "50vh",
                "screen-75": "75vh"
            }
        }
    })
}

/// Base token set, validated like any user-supplied document.
pub fn default_table() -> ValidationResult<TokenTable> {
    TokenTable::load(&default_raw_tokens())
}
