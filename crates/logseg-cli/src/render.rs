use is_terminal::IsTerminal;
use logseg_types::Token;
use owo_colors::OwoColorize;

/// Render a token sequence for the terminal: highlighted tokens get the
/// search-hit color, blob tokens are dimmed. Color only when stdout is a
/// terminal so piped output stays plain.
pub fn tokens(tokens: &[Token]) -> String {
    let color = std::io::stdout().is_terminal();
    let mut out = String::new();

    for token in tokens {
        if color && token.is_mark {
            out.push_str(&token.text.black().on_yellow().to_string());
        } else if color && token.is_blob_word {
            out.push_str(&token.text.dimmed().to_string());
        } else {
            out.push_str(&token.text);
        }
    }
    out
}
