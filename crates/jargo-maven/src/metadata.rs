//! maven-metadata.xml documents: parsing for version and snapshot build
//! number discovery, and generation for publication.

use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

use jargo_core::version::VersionNumber;

/// Artifact-level Maven metadata listing available versions.
#[derive(Debug, Clone, Default)]
pub struct MavenMetadata {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub latest: Option<VersionNumber>,
    pub release: Option<VersionNumber>,
    pub versions: Vec<VersionNumber>,
}

/// Version-level metadata carrying the current snapshot timestamp and
/// build number.
#[derive(Debug, Clone, Default)]
pub struct SnapshotMetadata {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<String>,
    pub build_number: Option<u32>,
    pub last_updated: Option<String>,
}

/// One artifact entry in a generated snapshot metadata document.
#[derive(Debug, Clone)]
pub struct SnapshotVersionEntry {
    pub classifier: Option<String>,
    pub extension: String,
}

/// UTC timestamp in snapshot-qualifier format, `yyyyMMdd.HHmmss`.
pub fn format_snapshot_timestamp(moment: DateTime<Utc>) -> String {
    moment.format("%Y%m%d.%H%M%S").to_string()
}

/// UTC timestamp in `<lastUpdated>` format, `yyyyMMddHHmmss`.
pub fn format_last_updated(moment: DateTime<Utc>) -> String {
    moment.format("%Y%m%d%H%M%S").to_string()
}

/// Parse an artifact-level `maven-metadata.xml` that lists available versions.
///
/// Version strings that do not parse as [`VersionNumber`] are skipped.
pub fn parse_metadata(xml: &str) -> miette::Result<MavenMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = MavenMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path.join(">");

                match ctx.as_str() {
                    "metadata>groupId" => meta.group_id = Some(text_buf.clone()),
                    "metadata>artifactId" => meta.artifact_id = Some(text_buf.clone()),
                    "metadata>versioning>latest" => {
                        meta.latest = VersionNumber::parse(&text_buf);
                    }
                    "metadata>versioning>release" => {
                        meta.release = VersionNumber::parse(&text_buf);
                    }
                    "metadata>versioning>versions>version" => {
                        match VersionNumber::parse(&text_buf) {
                            Some(version) => meta.versions.push(version),
                            None => tracing::debug!("skipping unparseable version {text_buf:?}"),
                        }
                    }
                    _ => {}
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(jargo_util::errors::JargoError::Generic {
                    message: format!("Failed to parse maven-metadata.xml: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(meta)
}

/// Parse a version-level `maven-metadata.xml` for the current snapshot
/// timestamp and build number.
pub fn parse_snapshot_metadata(xml: &str) -> miette::Result<SnapshotMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = SnapshotMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path.join(">");

                match ctx.as_str() {
                    "metadata>groupId" => meta.group_id = Some(text_buf.clone()),
                    "metadata>artifactId" => meta.artifact_id = Some(text_buf.clone()),
                    "metadata>version" => meta.version = Some(text_buf.clone()),
                    "metadata>versioning>snapshot>timestamp" => {
                        meta.timestamp = Some(text_buf.clone());
                    }
                    "metadata>versioning>snapshot>buildNumber" => {
                        meta.build_number = text_buf.parse().ok();
                    }
                    "metadata>versioning>lastUpdated" => {
                        meta.last_updated = Some(text_buf.clone());
                    }
                    _ => {}
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(jargo_util::errors::JargoError::Generic {
                    message: format!("Failed to parse snapshot metadata: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(meta)
}

/// Build the artifact-level `maven-metadata.xml` for a publication.
///
/// `latest` and `release` both point at `current`; the version list is the
/// union of `current` and `other_versions`, sorted and deduplicated.
pub fn build_metadata(
    group_id: &str,
    artifact_id: &str,
    current: &VersionNumber,
    other_versions: &[VersionNumber],
    updated: DateTime<Utc>,
) -> String {
    let mut all: Vec<VersionNumber> = other_versions.to_vec();
    all.push(current.clone());
    all.sort();
    all.dedup();

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<metadata>\n");
    xml.push_str(&format!("  <groupId>{}</groupId>\n", escape(group_id)));
    xml.push_str(&format!(
        "  <artifactId>{}</artifactId>\n",
        escape(artifact_id)
    ));
    xml.push_str("  <versioning>\n");
    xml.push_str(&format!("    <latest>{current}</latest>\n"));
    xml.push_str(&format!("    <release>{current}</release>\n"));
    xml.push_str("    <versions>\n");
    for version in &all {
        xml.push_str(&format!("      <version>{version}</version>\n"));
    }
    xml.push_str("    </versions>\n");
    xml.push_str(&format!(
        "    <lastUpdated>{}</lastUpdated>\n",
        format_last_updated(updated)
    ));
    xml.push_str("  </versioning>\n");
    xml.push_str("</metadata>\n");
    xml
}

/// Build the version-level `maven-metadata.xml` for a snapshot publication.
///
/// `version` is the literal snapshot version (directory name), `actual` the
/// timestamped version embedded in file names. One `<snapshotVersion>` is
/// emitted per entry, plus one for the POM.
pub fn build_snapshot_metadata(
    group_id: &str,
    artifact_id: &str,
    version: &VersionNumber,
    actual: &VersionNumber,
    timestamp: &str,
    build_number: u32,
    entries: &[SnapshotVersionEntry],
    updated: DateTime<Utc>,
) -> String {
    let last_updated = format_last_updated(updated);

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<metadata modelVersion=\"1.1.0\">\n");
    xml.push_str(&format!("  <groupId>{}</groupId>\n", escape(group_id)));
    xml.push_str(&format!(
        "  <artifactId>{}</artifactId>\n",
        escape(artifact_id)
    ));
    xml.push_str(&format!("  <version>{version}</version>\n"));
    xml.push_str("  <versioning>\n");
    xml.push_str("    <snapshot>\n");
    xml.push_str(&format!("      <timestamp>{timestamp}</timestamp>\n"));
    xml.push_str(&format!(
        "      <buildNumber>{build_number}</buildNumber>\n"
    ));
    xml.push_str("    </snapshot>\n");
    xml.push_str("    <snapshotVersions>\n");
    let pom_entry = SnapshotVersionEntry {
        classifier: None,
        extension: "pom".to_string(),
    };
    for entry in entries.iter().chain(std::iter::once(&pom_entry)) {
        xml.push_str("      <snapshotVersion>\n");
        if let Some(ref classifier) = entry.classifier {
            xml.push_str(&format!(
                "        <classifier>{}</classifier>\n",
                escape(classifier)
            ));
        }
        xml.push_str(&format!(
            "        <extension>{}</extension>\n",
            escape(&entry.extension)
        ));
        xml.push_str(&format!("        <value>{actual}</value>\n"));
        xml.push_str(&format!("        <updated>{last_updated}</updated>\n"));
        xml.push_str("      </snapshotVersion>\n");
    }
    xml.push_str("    </snapshotVersions>\n");
    xml.push_str(&format!(
        "    <lastUpdated>{last_updated}</lastUpdated>\n"
    ));
    xml.push_str("  </versioning>\n");
    xml.push_str("</metadata>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn moment() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 3, 29, 22, 54, 32).unwrap()
    }

    #[test]
    fn parse_artifact_metadata() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>com.google.guava</groupId>
  <artifactId>guava</artifactId>
  <versioning>
    <latest>1.5.0</latest>
    <release>1.5.0</release>
    <versions>
      <version>1.4.0</version>
      <version>1.4.1</version>
      <version>1.5.0</version>
    </versions>
    <lastUpdated>20240101120000</lastUpdated>
  </versioning>
</metadata>"#;
        let meta = parse_metadata(xml).unwrap();
        assert_eq!(meta.group_id.as_deref(), Some("com.google.guava"));
        assert_eq!(meta.artifact_id.as_deref(), Some("guava"));
        assert_eq!(meta.latest, VersionNumber::parse("1.5.0"));
        assert_eq!(meta.release, VersionNumber::parse("1.5.0"));
        assert_eq!(meta.versions.len(), 3);
        assert_eq!(meta.versions[0].to_string(), "1.4.0");
        assert_eq!(meta.versions[2].to_string(), "1.5.0");
    }

    #[test]
    fn unparseable_versions_are_skipped() {
        let xml = r#"<metadata>
  <versioning>
    <versions>
      <version>1.0.0</version>
      <version>not-a-version</version>
      <version>2.0.0</version>
    </versions>
  </versioning>
</metadata>"#;
        let meta = parse_metadata(xml).unwrap();
        assert_eq!(meta.versions.len(), 2);
    }

    #[test]
    fn parse_snapshot_meta() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata modelVersion="1.1.0">
  <groupId>com.example</groupId>
  <artifactId>myapp</artifactId>
  <version>1.2.3-SNAPSHOT</version>
  <versioning>
    <snapshot>
      <timestamp>20230329.225432</timestamp>
      <buildNumber>42</buildNumber>
    </snapshot>
    <lastUpdated>20230329225432</lastUpdated>
  </versioning>
</metadata>"#;
        let meta = parse_snapshot_metadata(xml).unwrap();
        assert_eq!(meta.version.as_deref(), Some("1.2.3-SNAPSHOT"));
        assert_eq!(meta.timestamp.as_deref(), Some("20230329.225432"));
        assert_eq!(meta.build_number, Some(42));
        assert_eq!(meta.last_updated.as_deref(), Some("20230329225432"));
    }

    #[test]
    fn timestamp_formats() {
        assert_eq!(format_snapshot_timestamp(moment()), "20230329.225432");
        assert_eq!(format_last_updated(moment()), "20230329225432");
    }

    #[test]
    fn built_metadata_round_trips() {
        let current = VersionNumber::parse("1.2.3").unwrap();
        let others = vec![
            VersionNumber::parse("1.0.0").unwrap(),
            VersionNumber::parse("1.1.0").unwrap(),
        ];
        let xml = build_metadata("com.example", "myapp", &current, &others, moment());

        let meta = parse_metadata(&xml).unwrap();
        assert_eq!(meta.group_id.as_deref(), Some("com.example"));
        assert_eq!(meta.artifact_id.as_deref(), Some("myapp"));
        assert_eq!(meta.latest, Some(current.clone()));
        assert_eq!(meta.release, Some(current));
        assert_eq!(
            meta.versions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["1.0.0", "1.1.0", "1.2.3"]
        );
        assert!(xml.contains("<lastUpdated>20230329225432</lastUpdated>"));
    }

    #[test]
    fn built_metadata_sorts_and_deduplicates() {
        let current = VersionNumber::parse("1.2.0").unwrap();
        let others = vec![
            VersionNumber::parse("2.0.0").unwrap(),
            VersionNumber::parse("1.2.0").unwrap(),
            VersionNumber::parse("0.9.0").unwrap(),
        ];
        let xml = build_metadata("com.example", "myapp", &current, &others, moment());
        let meta = parse_metadata(&xml).unwrap();
        assert_eq!(
            meta.versions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["0.9.0", "1.2.0", "2.0.0"]
        );
    }

    #[test]
    fn built_snapshot_metadata_lists_artifacts_and_pom() {
        let version = VersionNumber::parse("1.2.3-SNAPSHOT").unwrap();
        let actual = version.with_qualifier("20230329.225432-7");
        let entries = vec![
            SnapshotVersionEntry {
                classifier: None,
                extension: "jar".to_string(),
            },
            SnapshotVersionEntry {
                classifier: Some("sources".to_string()),
                extension: "jar".to_string(),
            },
        ];
        let xml = build_snapshot_metadata(
            "com.example",
            "myapp",
            &version,
            &actual,
            "20230329.225432",
            7,
            &entries,
            moment(),
        );

        let meta = parse_snapshot_metadata(&xml).unwrap();
        assert_eq!(meta.version.as_deref(), Some("1.2.3-SNAPSHOT"));
        assert_eq!(meta.timestamp.as_deref(), Some("20230329.225432"));
        assert_eq!(meta.build_number, Some(7));

        // Two artifact entries plus the POM entry.
        assert_eq!(xml.matches("<snapshotVersion>").count(), 3);
        assert_eq!(xml.matches("<extension>pom</extension>").count(), 1);
        assert_eq!(xml.matches("<classifier>sources</classifier>").count(), 1);
        assert_eq!(
            xml.matches("<value>1.2.3-20230329.225432-7</value>").count(),
            3
        );
    }
}
