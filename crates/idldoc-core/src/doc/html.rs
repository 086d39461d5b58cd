//! HTML page generation
//!
//! Output layout, relative to the documentation root:
//!
//! ```text
//! index.html                    all packages
//! styles.css, msg-styles.css
//! <pkg>/index.html              interfaces of one package
//! <pkg>/<kind>/<Name>.html      one interface
//! ```

use std::fmt::{self, Write};

use crate::ast::{InterfaceId, InterfaceKind};
use crate::source::PackageInterfaces;

use super::compact::{CompactDefinition, MessageTable, Section};
use super::raw::render_raw_text;
use super::style::{MSG_STYLESHEET, STYLESHEET};

/// Everything an interface page shows
#[derive(Debug, Clone, Copy)]
pub struct InterfacePage<'a> {
    pub id: &'a InterfaceId,
    pub compact: &'a CompactDefinition,
    pub raw_source: &'a str,
    pub timestamp: &'a str,
}

/// Generates the static documentation pages
pub struct PageGenerator;

impl PageGenerator {
    /// Page path relative to the documentation root
    pub fn interface_path(id: &InterfaceId) -> String {
        format!("{}/{}/{}.html", id.package, id.kind.dir_name(), id.name)
    }

    /// Package index path relative to the documentation root
    pub fn package_index_path(package: &str) -> String {
        format!("{package}/index.html")
    }

    /// Render one interface page
    pub fn interface_page(page: &InterfacePage<'_>) -> String {
        let mut output = String::new();
        // fmt::Write into a String never fails
        let _ = Self::write_interface_page(&mut output, page);
        output
    }

    /// Render the index of one package
    pub fn package_index(package: &str, interfaces: &PackageInterfaces, timestamp: &str) -> String {
        let mut output = String::new();
        let _ = Self::write_package_index(&mut output, package, interfaces, timestamp);
        output
    }

    /// Render the index of all packages
    pub fn root_index<'a>(
        packages: impl IntoIterator<Item = (&'a str, &'a PackageInterfaces)>,
        timestamp: &str,
    ) -> String {
        let mut output = String::new();
        let _ = Self::write_root_index(&mut output, packages, timestamp);
        output
    }

    fn write_interface_page(output: &mut String, page: &InterfacePage<'_>) -> fmt::Result {
        let id = page.id;
        let title = format!("{}/{}/{}", id.package, id.kind.dir_name(), id.name);
        Self::write_head(output, &title, "../../")?;

        writeln!(output, "<header>")?;
        writeln!(
            output,
            "  <p class=\"breadcrumb\"><a href=\"../../index.html\">Packages</a> / <a href=\"../index.html\">{}</a></p>",
            escape_html(&id.package)
        )?;
        writeln!(
            output,
            "  <h1>{}: {}</h1>",
            id.kind.label(),
            escape_html(&id.name)
        )?;
        writeln!(output, "</header>")?;

        writeln!(output, "<main>")?;
        writeln!(output, "<section class=\"compact-definition\">")?;
        writeln!(output, "  <h2>Compact Definition</h2>")?;
        for section in &page.compact.sections {
            Self::write_section(output, section)?;
        }
        writeln!(output, "</section>")?;

        writeln!(output, "<section class=\"raw-definition\">")?;
        writeln!(output, "  <h2>Raw Definition</h2>")?;
        writeln!(output, "  <div class=\"raw\">")?;
        output.push_str(&render_raw_text(page.raw_source));
        writeln!(output, "  </div>")?;
        writeln!(output, "</section>")?;
        writeln!(output, "</main>")?;

        Self::write_footer(output, page.timestamp)
    }

    fn write_section(output: &mut String, section: &Section) -> fmt::Result {
        writeln!(output, "  <div class=\"message-section\">")?;
        if let Some(name) = section.name {
            writeln!(output, "    <h3>{}</h3>", capitalize(name))?;
        }
        Self::write_table(output, &section.table)?;
        writeln!(output, "  </div>")?;
        if section.separator {
            writeln!(output, "  <hr class=\"separator\"/>")?;
        }
        Ok(())
    }

    fn write_table(output: &mut String, table: &MessageTable) -> fmt::Result {
        if table.is_empty() {
            return writeln!(output, "    <p class=\"empty\">No fields</p>");
        }

        writeln!(output, "    <table class=\"definition\">")?;
        for (ty, name) in table.constant_rows() {
            writeln!(
                output,
                "      <tr class=\"constant\"><td class=\"type\">{}</td><td class=\"name\">{}</td></tr>",
                escape_html(ty),
                escape_html(name)
            )?;
        }
        for (ty, name, default, link) in table.field_rows() {
            let ty = if link.is_empty() {
                escape_html(ty)
            } else {
                format!(
                    "<a href=\"../../{}\">{}</a>",
                    escape_html(link),
                    escape_html(ty)
                )
            };
            writeln!(
                output,
                "      <tr class=\"field\"><td class=\"type\">{ty}</td><td class=\"name\">{}{}</td></tr>",
                escape_html(name),
                escape_html(default)
            )?;
        }
        writeln!(output, "    </table>")
    }

    fn write_package_index(
        output: &mut String,
        package: &str,
        interfaces: &PackageInterfaces,
        timestamp: &str,
    ) -> fmt::Result {
        Self::write_head(output, package, "../")?;
        writeln!(output, "<header>")?;
        writeln!(
            output,
            "  <p class=\"breadcrumb\"><a href=\"../index.html\">Packages</a></p>"
        )?;
        writeln!(output, "  <h1>{}</h1>", escape_html(package))?;
        if let Some(version) = &interfaces.version {
            writeln!(output, "  <p class=\"version\">Version {}</p>", escape_html(version))?;
        }
        if let Some(description) = &interfaces.description {
            writeln!(output, "  <p class=\"description\">{}</p>", escape_html(description))?;
        }
        writeln!(output, "</header>")?;

        writeln!(output, "<main>")?;
        for kind in InterfaceKind::ALL {
            let names = interfaces.names(kind);
            if names.is_empty() {
                continue;
            }
            writeln!(output, "<section id=\"{}\">", kind.dir_name())?;
            writeln!(output, "  <h2>{}</h2>", kind.plural_label())?;
            writeln!(output, "  <ul>")?;
            for name in names {
                writeln!(
                    output,
                    "    <li><a href=\"{}/{}.html\">{}</a></li>",
                    kind.dir_name(),
                    escape_html(name),
                    escape_html(name)
                )?;
            }
            writeln!(output, "  </ul>")?;
            writeln!(output, "</section>")?;
        }
        writeln!(output, "</main>")?;

        Self::write_footer(output, timestamp)
    }

    fn write_root_index<'a>(
        output: &mut String,
        packages: impl IntoIterator<Item = (&'a str, &'a PackageInterfaces)>,
        timestamp: &str,
    ) -> fmt::Result {
        Self::write_head(output, "Interface Packages", "")?;
        writeln!(output, "<header>")?;
        writeln!(output, "  <h1>Interface Packages</h1>")?;
        writeln!(output, "</header>")?;

        writeln!(output, "<main>")?;
        writeln!(output, "<table class=\"packages\">")?;
        writeln!(
            output,
            "  <tr><th>Package</th><th>Messages</th><th>Services</th><th>Actions</th></tr>"
        )?;
        for (package, interfaces) in packages {
            writeln!(
                output,
                "  <tr><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&Self::package_index_path(package)),
                escape_html(package),
                interfaces.names(InterfaceKind::Message).len(),
                interfaces.names(InterfaceKind::Service).len(),
                interfaces.names(InterfaceKind::Action).len()
            )?;
        }
        writeln!(output, "</table>")?;
        writeln!(output, "</main>")?;

        Self::write_footer(output, timestamp)
    }

    fn write_head(output: &mut String, title: &str, root: &str) -> fmt::Result {
        writeln!(output, "<!DOCTYPE html>")?;
        writeln!(output, "<html lang=\"en\">")?;
        writeln!(output, "<head>")?;
        writeln!(output, "  <meta charset=\"UTF-8\">")?;
        writeln!(
            output,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(output, "  <title>{}</title>", escape_html(title))?;
        writeln!(
            output,
            "  <link rel=\"stylesheet\" href=\"{root}{STYLESHEET}\">"
        )?;
        writeln!(
            output,
            "  <link rel=\"stylesheet\" href=\"{root}{MSG_STYLESHEET}\">"
        )?;
        writeln!(output, "</head>")?;
        writeln!(output, "<body>")
    }

    fn write_footer(output: &mut String, timestamp: &str) -> fmt::Result {
        writeln!(output, "<footer>")?;
        writeln!(
            output,
            "  <p>Autogenerated on {}</p>",
            escape_html(timestamp)
        )?;
        writeln!(output, "</footer>")?;
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")
    }
}

/// Escape text for use in element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{assemble, FieldNameStyle};
    use crate::parser::Parser;

    fn page_for(kind: InterfaceKind, name: &str, source: &str) -> String {
        let id = InterfaceId::new("demo_msgs", kind, name);
        let iface = Parser::parse_interface(&id, source).unwrap();
        let compact = assemble(&iface, FieldNameStyle::Declared);
        PageGenerator::interface_page(&InterfacePage {
            id: &id,
            compact: &compact,
            raw_source: source,
            timestamp: "Thu, 01 Jan 2026 00:00:00",
        })
    }

    #[test]
    fn interface_page_structure() {
        let html = page_for(
            InterfaceKind::Message,
            "Holder",
            "int32 MAX=5\ngeometry_msgs/Pose pose\nstring<=4 tag \"ab\"\n",
        );
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>demo_msgs/msg/Holder</title>"));
        assert!(html.contains("<h1>Message: Holder</h1>"));
        assert!(html.contains("href=\"../../styles.css\""));
        assert!(html.contains(
            "<a href=\"../../geometry_msgs/msg/Pose.html\">geometry_msgs/Pose</a>"
        ));
        assert!(html.contains("<td class=\"type\">string[&lt;=4]</td>"));
        assert!(html.contains("tag=&quot;ab&quot;"));
        assert!(html.contains("MAX=5"));
        assert!(html.contains("Autogenerated on Thu, 01 Jan 2026 00:00:00"));
    }

    #[test]
    fn service_page_has_separator_after_request() {
        let html = page_for(InterfaceKind::Service, "Trigger", "---\nbool success\nstring message\n");
        let request = html.find("<h3>Request</h3>").unwrap();
        let separator = html.find("<hr class=\"separator\"/>").unwrap();
        let response = html.find("<h3>Response</h3>").unwrap();
        assert!(request < separator && separator < response);
        assert!(html.contains("No fields"));
    }

    #[test]
    fn package_index_lists_kinds() {
        let mut interfaces = PackageInterfaces::default();
        interfaces.push(InterfaceKind::Message, "Point");
        interfaces.push(InterfaceKind::Service, "Reset");
        let html = PageGenerator::package_index("demo_msgs", &interfaces, "now");
        assert!(html.contains("<h2>Messages</h2>"));
        assert!(html.contains("<a href=\"msg/Point.html\">Point</a>"));
        assert!(html.contains("<a href=\"srv/Reset.html\">Reset</a>"));
        assert!(!html.contains("<h2>Actions</h2>"));
        assert!(!html.contains("class=\"version\""));
    }

    #[test]
    fn package_index_shows_manifest_details() {
        let mut interfaces = PackageInterfaces {
            version: Some("1.2.0".into()),
            description: Some("Points & poses".into()),
            ..PackageInterfaces::default()
        };
        interfaces.push(InterfaceKind::Message, "Point");
        let html = PageGenerator::package_index("demo_msgs", &interfaces, "now");
        assert!(html.contains("<p class=\"version\">Version 1.2.0</p>"));
        assert!(html.contains("<p class=\"description\">Points &amp; poses</p>"));
    }

    #[test]
    fn root_index_links_packages() {
        let mut interfaces = PackageInterfaces::default();
        interfaces.push(InterfaceKind::Action, "Dock");
        let html = PageGenerator::root_index([("nav_msgs", &interfaces)], "now");
        assert!(html.contains("<a href=\"nav_msgs/index.html\">nav_msgs</a>"));
        assert!(html.contains("<td>0</td><td>0</td><td>1</td>"));
    }

    #[test]
    fn escapes_text() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn paths() {
        let id = InterfaceId::new("demo_msgs", InterfaceKind::Action, "Dock");
        assert_eq!(PageGenerator::interface_path(&id), "demo_msgs/action/Dock.html");
        assert_eq!(PageGenerator::package_index_path("demo_msgs"), "demo_msgs/index.html");
    }
}
