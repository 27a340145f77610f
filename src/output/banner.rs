#![forbid(unsafe_code)]

//! One-time startup banner naming the active rule count and mode

const WIDTH: usize = 51;

/// Render the banner shown when a check starts
pub fn render(rule_count: usize, strict: bool) -> String {
    let mode = if strict { "STRICT 🔴" } else { "NORMAL 🟢" };
    let lines = [
        "Police on patrol...".to_string(),
        "No sloppy code gets through!".to_string(),
        format!("Rules loaded: {:<2} rules", rule_count),
        format!("Mode: {}", mode),
    ];

    let mut out = String::new();
    out.push_str(&format!("╔{}╗\n", "═".repeat(WIDTH)));
    for line in &lines {
        let pad = WIDTH.saturating_sub(line.chars().count() + 2);
        out.push_str(&format!("║  {}{}║\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╚{}╝\n", "═".repeat(WIDTH)));
    out
}
