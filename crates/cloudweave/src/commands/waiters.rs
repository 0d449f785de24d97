use cloudweave_cloud_aws::GlueWaiter;
use cloudweave_config::Settings;
use colored::Colorize;

/// Glueウェイターの一覧（状態と設定済みタイムアウト）
pub fn list(settings: &Settings) -> anyhow::Result<()> {
    println!("{}", "Glue ウェイター:".bold());

    for waiter in GlueWaiter::ALL {
        let target = if waiter.target().is_empty() {
            "(削除完了)".dimmed().to_string()
        } else {
            waiter.target().join(", ").green().to_string()
        };

        println!(
            "  {} [{}] → {} (timeout: {}s)",
            waiter.name().cyan(),
            waiter.pending().join(", ").yellow(),
            target,
            waiter.timeout(&settings.glue).as_secs()
        );
    }

    Ok(())
}
