//! POM document generation for publication.

use quick_xml::escape::escape;

use jargo_core::dependency::{DependencyScope, DependencyScopes};
use jargo_core::publish::PublishInfo;

/// Build the `pom.xml` document for a publication.
///
/// The `<version>` is the declared project version; for snapshots the
/// timestamped version appears only in file names, never inside the POM.
/// Compile-scoped dependencies omit the `<scope>` tag, matching the Maven
/// default.
pub fn build_pom(info: &PublishInfo, dependencies: &DependencyScopes) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<project xmlns=\"http://maven.apache.org/POM/4.0.0\"\n");
    xml.push_str("         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n");
    xml.push_str("         xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n");
    xml.push_str("  <modelVersion>4.0.0</modelVersion>\n");
    push_tag(&mut xml, 1, "groupId", &info.group_id);
    push_tag(&mut xml, 1, "artifactId", &info.artifact_id);
    push_tag(&mut xml, 1, "version", &info.version.to_string());
    if let Some(ref name) = info.name {
        push_tag(&mut xml, 1, "name", name);
    }
    if let Some(ref description) = info.description {
        push_tag(&mut xml, 1, "description", description);
    }
    if let Some(ref url) = info.url {
        push_tag(&mut xml, 1, "url", url);
    }

    if !info.licenses.is_empty() {
        xml.push_str("  <licenses>\n");
        for license in &info.licenses {
            xml.push_str("    <license>\n");
            push_tag(&mut xml, 3, "name", &license.name);
            if let Some(ref url) = license.url {
                push_tag(&mut xml, 3, "url", url);
            }
            xml.push_str("    </license>\n");
        }
        xml.push_str("  </licenses>\n");
    }

    if !info.developers.is_empty() {
        xml.push_str("  <developers>\n");
        for developer in &info.developers {
            xml.push_str("    <developer>\n");
            push_tag(&mut xml, 3, "id", &developer.id);
            if let Some(ref name) = developer.name {
                push_tag(&mut xml, 3, "name", name);
            }
            if let Some(ref email) = developer.email {
                push_tag(&mut xml, 3, "email", email);
            }
            if let Some(ref url) = developer.url {
                push_tag(&mut xml, 3, "url", url);
            }
            xml.push_str("    </developer>\n");
        }
        xml.push_str("  </developers>\n");
    }

    if let Some(ref scm) = info.scm {
        xml.push_str("  <scm>\n");
        if let Some(ref connection) = scm.connection {
            push_tag(&mut xml, 2, "connection", connection);
        }
        if let Some(ref developer_connection) = scm.developer_connection {
            push_tag(&mut xml, 2, "developerConnection", developer_connection);
        }
        if let Some(ref url) = scm.url {
            push_tag(&mut xml, 2, "url", url);
        }
        xml.push_str("  </scm>\n");
    }

    if !dependencies.is_empty() {
        xml.push_str("  <dependencies>\n");
        for scope in DependencyScope::ALL {
            for dep in dependencies.scope(scope) {
                xml.push_str("    <dependency>\n");
                push_tag(&mut xml, 3, "groupId", &dep.group);
                push_tag(&mut xml, 3, "artifactId", &dep.artifact);
                push_tag(&mut xml, 3, "version", &dep.version);
                if let Some(ref classifier) = dep.classifier {
                    push_tag(&mut xml, 3, "classifier", classifier);
                }
                if let Some(ref type_) = dep.type_ {
                    push_tag(&mut xml, 3, "type", type_);
                }
                if scope != DependencyScope::Compile {
                    push_tag(&mut xml, 3, "scope", scope.as_str());
                }
                if dep.optional {
                    push_tag(&mut xml, 3, "optional", "true");
                }
                if !dep.exclusions.is_empty() {
                    xml.push_str("      <exclusions>\n");
                    for exclusion in &dep.exclusions {
                        xml.push_str("        <exclusion>\n");
                        push_tag(&mut xml, 5, "groupId", &exclusion.group);
                        push_tag(
                            &mut xml,
                            5,
                            "artifactId",
                            exclusion.artifact.as_deref().unwrap_or("*"),
                        );
                        xml.push_str("        </exclusion>\n");
                    }
                    xml.push_str("      </exclusions>\n");
                }
                xml.push_str("    </dependency>\n");
            }
        }
        xml.push_str("  </dependencies>\n");
    }

    xml.push_str("</project>\n");
    xml
}

fn push_tag(xml: &mut String, depth: usize, tag: &str, value: &str) {
    let indent = "  ".repeat(depth);
    xml.push_str(&format!("{indent}<{tag}>{}</{tag}>\n", escape(value)));
}
