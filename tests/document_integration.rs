use sentseg::config::Config;
use sentseg::discovery::{collect_documents, DiscoveryConfig};
use sentseg::output::{DocumentWriter, OutputFormat};
use sentseg::reader::{DocumentReader, ReaderConfig};
use sentseg::Pipeline;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

/// Discover, read and segment every document below `fixture`, the way the CLI does.
async fn segment_all(fixture: &TestFixture, pipeline: &Pipeline, format: OutputFormat, use_mmap: bool) -> (usize, String) {
    let documents = collect_documents(vec![fixture.root_path.clone()], DiscoveryConfig::default())
        .await
        .expect("Discovery should succeed");
    let reader = DocumentReader::new(ReaderConfig {
        use_mmap,
        ..Default::default()
    });

    let mut writer = DocumentWriter::new(pipeline, format, false);
    let mut out = Vec::new();
    let mut failed = 0;

    let mut paths: Vec<_> = documents.into_iter().map(|d| d.path).collect();
    paths.sort();

    for path in paths {
        let (text, _stats) = reader.read_document(&path).await.expect("Reading should not fail");
        match text {
            Some(text) => {
                writer
                    .write_document(&mut out, &path.display().to_string(), &text)
                    .unwrap();
            }
            None => failed += 1,
        }
    }

    (failed, String::from_utf8(out).unwrap())
}

fn default_pipeline() -> Pipeline {
    Pipeline::new(Default::default()).unwrap()
}

#[tokio::test]
async fn test_directory_of_documents() {
    let fixture = TestFixture::new();
    fixture.create_document("a.txt", b"This is Mr. Motto here. And here is Mrs. Smithers.");
    fixture.create_document("nested/b.txt", b"Who did this? I. No! Such a shame.\n\nNew paragraph.\n");
    fixture.create_document("notes.md", b"Not selected. By the pattern.");

    for use_mmap in [false, true] {
        let (failed, output) = segment_all(&fixture, &default_pipeline(), OutputFormat::Text, use_mmap).await;

        assert_eq!(failed, 0);
        assert_eq!(
            output,
            "This is Mr. Motto here.\nAnd here is Mrs. Smithers.\n\n\
             Who did this?\nI. No!\nSuch a shame.\n\n\
             New paragraph.\n\n"
        );
    }
}

#[tokio::test]
async fn test_invalid_utf8_document_is_skipped() {
    let fixture = TestFixture::new();
    fixture.create_document("bad.txt", &[0xFF, 0xFE, 0xFD]);
    fixture.create_document("good.txt", b"Fine. Really.");

    let (failed, output) = segment_all(&fixture, &default_pipeline(), OutputFormat::Tokens, false).await;

    assert_eq!(failed, 1);
    assert_eq!(output, "Fine .\nReally .\n\n");
}

#[tokio::test]
async fn test_empty_document() {
    let fixture = TestFixture::new();
    fixture.create_document("empty.txt", b"");

    let (failed, output) = segment_all(&fixture, &default_pipeline(), OutputFormat::Json, true).await;

    assert_eq!(failed, 0);
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_json_records_name_their_source() {
    let fixture = TestFixture::new();
    let path = fixture.create_document("doc.txt", b"One. Two.");

    let (_, output) = segment_all(&fixture, &default_pipeline(), OutputFormat::Json, false).await;
    let records: Vec<serde_json::Value> = output.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["source"], path.display().to_string());
    assert_eq!(records[1]["index"], 1);
    assert_eq!(records[1]["text"], "Two.");
}

#[tokio::test]
async fn test_config_file_changes_segmentation() {
    let fixture = TestFixture::new();
    let config_path = fixture.create_config(
        r#"
        [lexicon]
        abbreviations = ["Bearb"]
        "#,
    );
    fixture.create_document("doc.txt", b"Edited by the Bearb. Meier and others.");

    let (_, output) = segment_all(&fixture, &default_pipeline(), OutputFormat::Text, false).await;
    assert_eq!(output, "Edited by the Bearb.\nMeier and others.\n\n");

    let config = Config::load(&config_path).await.unwrap();
    let pipeline = Pipeline::with_lexicon(config.segmenter_config(), config.build_lexicon()).unwrap();
    let (_, output) = segment_all(&fixture, &pipeline, OutputFormat::Text, false).await;
    assert_eq!(output, "Edited by the Bearb. Meier and others.\n\n");
}
