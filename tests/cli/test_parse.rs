//! Tests for command-line argument parsing

use clap::Parser;
use pdfread::cli::{Cli, Commands, OutputFormat};
use pdfread::core::types::DocumentStatus;
use std::path::PathBuf;

#[test]
fn test_process_all_flags() {
    let cli = Cli::try_parse_from([
        "pdfread",
        "process-all",
        "--concurrency",
        "3",
        "--adaptive",
        "--source-dir",
        "/data/pdfs",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::ProcessAll(args) => {
            assert_eq!(args.concurrency, Some(3));
            assert!(args.adaptive);
            assert_eq!(args.source_dir, Some(PathBuf::from("/data/pdfs")));
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_global_json_format() {
    let cli = Cli::try_parse_from(["pdfread", "stats", "--format", "json"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.command, Commands::Stats(_)));
}

#[test]
fn test_search_args() {
    let cli = Cli::try_parse_from(["pdfread", "search", "invoice", "-k", "5", "--literal"]).unwrap();
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.keyword, "invoice");
            assert_eq!(args.limit, Some(5));
            assert!(args.literal);
            assert!(!args.files_only);
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_list_documents_status_filter() {
    let cli =
        Cli::try_parse_from(["pdfread", "list-documents", "--status", "Error", "--page", "2"])
            .unwrap();
    match cli.command {
        Commands::ListDocuments(args) => {
            assert_eq!(args.status, Some(DocumentStatus::Error));
            assert_eq!(args.page, 2);
            assert_eq!(args.limit, None);
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_unknown_status_rejected() {
    let result = Cli::try_parse_from(["pdfread", "list-documents", "--status", "archived"]);
    assert!(result.is_err());
}

#[test]
fn test_process_one_requires_filename() {
    assert!(Cli::try_parse_from(["pdfread", "process-one"]).is_err());

    let cli = Cli::try_parse_from(["pdfread", "process-one", "report.pdf"]).unwrap();
    match cli.command {
        Commands::ProcessOne(args) => assert_eq!(args.filename, "report.pdf"),
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
