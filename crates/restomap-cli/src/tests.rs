use super::*;

#[test]
fn parses_list_command_with_query() {
    let cli = Cli::try_parse_from(["restomap", "list", "places.xlsx", "--query", "thai"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::List { ref source, ref query }
            if source.file == Path::new("places.xlsx") && query == "thai" && !source.base64
    ));
}

#[test]
fn query_defaults_to_empty() {
    let cli =
        Cli::try_parse_from(["restomap", "map", "places.xls"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Map { ref query, .. } if query.is_empty()
    ));
}

#[test]
fn parses_summary_with_base64_flag() {
    let cli = Cli::try_parse_from(["restomap", "summary", "upload.txt", "--base64"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Summary { ref source } if source.base64
    ));
}

#[test]
fn file_argument_is_required() {
    assert!(Cli::try_parse_from(["restomap", "list"]).is_err());
}

#[test]
fn missing_command_is_rejected() {
    assert!(Cli::try_parse_from(["restomap"]).is_err());
}

#[tokio::test]
async fn reading_a_missing_file_names_the_path() {
    let err = read_payload(Path::new("/nonexistent/places.xlsx"), false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/places.xlsx"));
}

#[tokio::test]
async fn base64_file_is_decoded_with_extension_hint() {
    let path = std::env::temp_dir().join(format!("restomap-cli-{}.xlsx", std::process::id()));
    tokio::fs::write(&path, "AAEC\n").await.expect("write temp file");

    let payload = read_payload(&path, true).await.expect("decodes");
    tokio::fs::remove_file(&path).await.ok();

    assert_eq!(payload.bytes, vec![0, 1, 2]);
    assert_eq!(payload.hint, Some(FormatHint::Xlsx));
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["restomap", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
