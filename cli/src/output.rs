//! Fixed-format text blocks written to stdout.

use std::fmt::Write as _;

use messages_core::{Command, HttpResponse};

pub const URI_PROMPT: &str = "URI? ";
pub const FAREWELL: &str = "Bye!";

/// The option list shown before every command prompt.
pub fn render_menu() -> String {
    let mut menu = String::from("----Available Options:----\n");
    for command in Command::ALL {
        let _ = writeln!(menu, "{}: {}", command.code(), command.label());
    }
    menu.push_str("\n\n\n");
    menu
}

/// Status code and body, the body copied through untouched.
pub fn render_response(response: &HttpResponse) -> String {
    format!(
        "Response:___________\nStatus:{}\nBody:{}\n\n\n\n",
        response.status, response.body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_code() {
        assert_eq!(
            render_menu(),
            "----Available Options:----\n\
             G1: Get One\n\
             GA: Get All\n\
             P: Post One\n\
             D: Delete One\n\
             Q: Quit\n\n\n\n"
        );
    }

    #[test]
    fn response_body_is_printed_verbatim() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: "{\"mStatus\":\"error\"}\n  raw".to_string(),
        };
        assert_eq!(
            render_response(&response),
            "Response:___________\nStatus:404\nBody:{\"mStatus\":\"error\"}\n  raw\n\n\n\n"
        );
    }
}
