use colored::Colorize;
use tastyforms_settings::{placeholder, BuildMode};

setup_command! {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(opts: Options) -> anyhow::Result<()> {
    let mode = tastyforms_settings::build_mode();

    if opts.json {
        println!("{}", to_json(mode)?);
        return Ok(());
    }

    println!("Build mode: {}", mode.to_string().bold());
    println!("API URL:    {}", mode.api_url().bold());
    if is_placeholder(mode) {
        println!(
            "{}",
            "The API URL is a placeholder, replace it with `tastyforms substitute` before distribution"
                .yellow()
        );
    }

    Ok(())
}

fn is_placeholder(mode: BuildMode) -> bool {
    placeholder::count(mode.api_url().as_bytes()) > 0
}

fn to_json(mode: BuildMode) -> anyhow::Result<String> {
    let value = serde_json::json!({
        "build_mode": mode,
        "api_url": mode.api_url(),
        "placeholder": is_placeholder(mode),
    });

    Ok(serde_json::to_string_pretty(&value)?)
}
