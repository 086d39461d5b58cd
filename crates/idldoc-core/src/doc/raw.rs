//! Raw definition text as HTML

use super::html::escape_html;

/// Render interface source for display.
///
/// Each line is escaped, spaces become `&nbsp;`, everything from the first
/// `#` on is wrapped in a comment span, and every line ends with `<br/>`.
pub fn render_raw_text(source: &str) -> String {
    let mut output = String::with_capacity(source.len() * 2);
    for line in source.lines() {
        let (code, comment) = match line.find('#') {
            Some(index) => (&line[..index], Some(&line[index..])),
            None => (line, None),
        };
        output.push_str(&preserve_spaces(code));
        if let Some(comment) = comment {
            output.push_str("<span class=\"comment\">");
            output.push_str(&preserve_spaces(comment));
            output.push_str("</span>");
        }
        output.push_str("<br/>\n");
    }
    output
}

fn preserve_spaces(text: &str) -> String {
    escape_html(text).replace(' ', "&nbsp;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_comments() {
        let html = render_raw_text("int32  a # the <a>\nint32 b");
        assert_eq!(
            html,
            "int32&nbsp;&nbsp;a&nbsp;<span class=\"comment\">#&nbsp;the&nbsp;&lt;a&gt;</span><br/>\n\
             int32&nbsp;b<br/>\n"
        );
    }

    #[test]
    fn full_line_comment() {
        assert_eq!(
            render_raw_text("# header"),
            "<span class=\"comment\">#&nbsp;header</span><br/>\n"
        );
    }

    #[test]
    fn blank_lines_kept() {
        assert_eq!(render_raw_text("a\n\nb"), "a<br/>\n<br/>\nb<br/>\n");
    }
}
