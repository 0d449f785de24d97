use super::load_website_document;
use cloudweave_cloud_aws::s3::website_schema;
use cloudweave_core::DocumentError;
use colored::Colorize;
use std::path::Path;

pub fn handle(file: &Path) -> anyhow::Result<()> {
    println!("{}", "設定を検証中...".blue());
    println!("ファイル: {}", file.display().to_string().cyan());

    let doc = load_website_document(file)?;

    match website_schema().validate(&doc) {
        Ok(()) => {
            println!("{}", "✓ 設定ファイルは正常です！".green().bold());
            println!();
            println!("サマリー:");
            println!("  bucket: {}", doc.get_str("bucket").unwrap_or("(未設定)").cyan());
            if let Some(owner) = doc.get_str("expected_bucket_owner") {
                println!("  expected_bucket_owner: {}", owner.cyan());
            }
            for block in ["index_document", "error_document", "redirect_all_requests_to", "routing_rule"] {
                if doc.get(block).is_some_and(|b| !b.is_unset()) {
                    println!("    - {}", block);
                }
            }
            Ok(())
        }
        Err(DocumentError::Invalid(violations)) => {
            eprintln!();
            eprintln!("{}", "✗ 設定エラー".red().bold());
            for violation in &violations {
                eprintln!("  - {}", violation);
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
