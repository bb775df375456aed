use std::fmt::Write;

/// builder for a self-contained html page: inline styles, external and
/// inline scripts, and body fragments in insertion order.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    title: String,
    styles: Vec<String>,
    external_scripts: Vec<String>,
    body: Vec<String>,
    inline_scripts: Vec<String>,
    footer: Option<String>,
}

impl HtmlDocument {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            styles: Vec::new(),
            external_scripts: Vec::new(),
            body: Vec::new(),
            inline_scripts: Vec::new(),
            footer: None,
        }
    }

    pub fn add_style(&mut self, css: &str) {
        self.styles.push(css.to_string());
    }

    /// a script loaded by url, placed after the body
    pub fn add_external_script(&mut self, src: &str) {
        self.external_scripts.push(src.to_string());
    }

    pub fn add_body(&mut self, html: String) {
        self.body.push(html);
    }

    /// scripts run in insertion order after the external scripts
    pub fn add_inline_script(&mut self, js: String) {
        self.inline_scripts.push(js);
    }

    pub fn set_footer(&mut self, text: &str) {
        self.footer = Some(text.to_string());
    }

    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut html = String::with_capacity(65536);
        write!(
            html,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 20px; color: #2c3e50; }}
h1 {{ text-align: center; }}
footer {{ text-align: center; color: #7f8c8d; font-size: 12px; margin-top: 30px; }}
"#,
            title = super::escape_html(&self.title)
        )?;
        for css in self.styles.iter() {
            writeln!(html, "{css}")?;
        }
        html.push_str("</style>\n</head>\n<body>\n");
        writeln!(html, "<h1>{}</h1>", super::escape_html(&self.title))?;
        for fragment in self.body.iter() {
            writeln!(html, "{fragment}")?;
        }
        if let Some(footer) = &self.footer {
            writeln!(html, "<footer>{}</footer>", super::escape_html(footer))?;
        }
        for src in self.external_scripts.iter() {
            writeln!(html, r#"<script src="{}"></script>"#, super::escape_html(src))?;
        }
        for js in self.inline_scripts.iter() {
            writeln!(html, "<script>\n{js}\n</script>")?;
        }
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}
