// http/page.rs — server-side rendering of the comparison page.
//
// One self-contained HTML document: the entry form with both textareas
// refilled, followed by the removed (---) and added (+++) tag lists.
// Built fresh per request from a plain `View` value; no global template
// state.

use crate::tags::TagDiff;

/// Everything the page needs to render.
#[derive(Debug, Default)]
pub struct View {
    /// Raw "old" field as the user submitted it.
    pub old: String,
    /// Raw "new" field as the user submitted it.
    pub new: String,
    pub diff: TagDiff,
}

const STYLE: &str = "\
	ul,li {
	    list-style-type: none;
	}
	input, textarea {
		margin-bottom: 5px;
		display: block;
	}
	.removed {
		color: darkred;
	}
	.added {
		color: darkgreen;
	}";

pub fn render(view: &View) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("<!DOCTYPE html><html><body>\n");
    out.push_str("<style>\n");
    out.push_str(STYLE);
    out.push_str("\n</style>\n");

    out.push_str("<form method=\"post\" action=\"/tags-diff\">\n");
    out.push_str("<label for=\"old\"><strong>Old Tags</strong></label>\n");
    out.push_str(&format!(
        "<textarea id=\"old\" name=\"old\" cols=\"60\" rows=\"6\">{}</textarea>\n",
        escape(&view.old)
    ));
    out.push_str("<label for=\"new\"><strong>New Tags</strong></label>\n");
    out.push_str(&format!(
        "<textarea id=\"new\" name=\"new\" cols=\"60\" rows=\"6\">{}</textarea>\n",
        escape(&view.new)
    ));
    out.push_str("<input type=\"submit\" value=\"Compare\">\n");
    out.push_str("</form>\n");

    out.push_str("<div id=\"diff\">\n<samp>\n");
    for tag in &view.diff.removed {
        out.push_str(&format!(
            "<li><strong class=\"removed\">---</strong> {}</li>\n",
            escape(tag)
        ));
    }
    for tag in &view.diff.added {
        out.push_str(&format!(
            "<li><strong class=\"added\">+++</strong> {}</li>\n",
            escape(tag)
        ));
    }
    out.push_str("</samp>\n</div>\n</body></html>\n");
    out
}

/// Minimal HTML escaping for text interpolated into the page body and
/// textarea contents.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::diff_fields;

    #[test]
    fn test_render_empty_view_has_form_and_no_entries() {
        let html = render(&View::default());
        assert!(html.contains("<form method=\"post\" action=\"/tags-diff\">"));
        assert!(html.contains("Old Tags"));
        assert!(html.contains("New Tags"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_render_lists_removed_then_added() {
        let view = View {
            old: "cat dog".to_string(),
            new: "dog fish".to_string(),
            diff: diff_fields("cat dog", "dog fish"),
        };
        let html = render(&view);
        let removed = html
            .find("<strong class=\"removed\">---</strong> cat")
            .expect("removed entry missing");
        let added = html
            .find("<strong class=\"added\">+++</strong> fish")
            .expect("added entry missing");
        assert!(removed < added, "removed entries render before added ones");
    }

    #[test]
    fn test_render_refills_textareas() {
        let view = View {
            old: "a b".to_string(),
            new: "b c".to_string(),
            diff: diff_fields("a b", "b c"),
        };
        let html = render(&view);
        assert!(html.contains(">a b</textarea>"));
        assert!(html.contains(">b c</textarea>"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let view = View {
            old: "<script>alert(1)</script>".to_string(),
            new: String::new(),
            diff: diff_fields("<script>alert(1)</script>", ""),
        };
        let html = render(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_covers_all_specials() {
        assert_eq!(escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape("plain"), "plain");
    }
}
