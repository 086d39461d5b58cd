//! Shared stylesheets written once into the documentation root

/// File name of the site-wide stylesheet
pub const STYLESHEET: &str = "styles.css";

/// File name of the interface table stylesheet
pub const MSG_STYLESHEET: &str = "msg-styles.css";

/// Site layout: typography, header, footer, index tables
pub const STYLES_CSS: &str = r#":root {
  --text-color: #222;
  --muted-color: #666;
  --accent-color: #2a5db0;
  --border-color: #ddd;
  --header-bg: #f4f6fa;
}

* {
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
  color: var(--text-color);
  line-height: 1.5;
  margin: 0;
}

header {
  background-color: var(--header-bg);
  border-bottom: 1px solid var(--border-color);
  padding: 1rem 2rem;
}

header h1 {
  margin: 0.25rem 0;
  font-size: 1.6rem;
}

.breadcrumb,
.version {
  margin: 0;
  font-size: 0.875rem;
  color: var(--muted-color);
}

.description {
  margin: 0.5rem 0 0;
}

main {
  padding: 1rem 2rem;
  max-width: 960px;
}

a {
  color: var(--accent-color);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

ul {
  padding-left: 1.25rem;
}

table.packages {
  border-collapse: collapse;
  width: 100%;
}

table.packages th,
table.packages td {
  text-align: left;
  padding: 0.3rem 0.75rem;
  border-bottom: 1px solid var(--border-color);
}

footer {
  padding: 1rem 2rem;
  font-size: 0.8rem;
  color: var(--muted-color);
  border-top: 1px solid var(--border-color);
}
"#;

/// Compact and raw definition styling for interface pages
pub const MSG_STYLES_CSS: &str = r#".compact-definition h3 {
  font-size: 1rem;
  margin: 1rem 0 0.25rem;
}

table.definition {
  border-collapse: collapse;
  font-family: 'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, monospace;
  font-size: 0.9rem;
}

table.definition td {
  padding: 0.15rem 1rem 0.15rem 0;
  vertical-align: top;
}

table.definition td.type {
  color: #555;
}

table.definition tr.constant td.name {
  color: #8a3b00;
}

hr.separator {
  border: none;
  border-top: 2px dashed #bbb;
  margin: 1rem 0;
}

.empty {
  color: #999;
  font-style: italic;
}

.raw {
  font-family: 'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, monospace;
  font-size: 0.9rem;
  background-color: #f8f8f8;
  border: 1px solid #e5e5e5;
  padding: 0.75rem;
  overflow-x: auto;
}

.raw .comment {
  color: blue;
}
"#;

/// Every stylesheet as `(file name, contents)`
pub fn stylesheets() -> [(&'static str, &'static str); 2] {
    [(STYLESHEET, STYLES_CSS), (MSG_STYLESHEET, MSG_STYLES_CSS)]
}
