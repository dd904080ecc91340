//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# panewise configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# Redirect rules are checked in order; the first match forwards the chords
# to the pane instead of running the workspace action.
#   kind  = "exact" (case-sensitive equality) | "pattern" (case-insensitive regex)
#   scope = "foremost" (most specific process only) | "any" (default)
[[redirect.rules]]
kind = "exact"
value = "tmux"
scope = "foremost"

[[redirect.rules]]
kind = "pattern"
value = '\b(?:[gnr]?vim\w*|vi)\b'
scope = "any"

[keys]
# protocol = "legacy"    # "legacy" | "kitty"

[host]
# kitten = "kitten"
# listen_on = "unix:/tmp/kitty"

[logging]
# level = "panewise=warn"
"##
    .to_string()
}
