//! Command execution.

use std::io::Write;
use std::path::Path;

use handwriting_application::{HandwritingClient, HttpTransport, RenderedOutput};
use handwriting_domain::{Pdf, Png, Style};
use handwriting_infrastructure::to_json_stable;
use tokio::io::{AsyncReadExt, AsyncWrite};
use tracing::info;

use crate::cli::{Commands, GetArgs, ListArgs, RenderArgs, RenderCommand, StylesCommand};
use crate::error::CliError;

/// Runs a parsed command against the service.
pub async fn run<T: HttpTransport>(
    client: &HandwritingClient<T>,
    command: Commands,
) -> Result<(), CliError> {
    match command {
        Commands::Styles(StylesCommand::List(args)) => list_styles(client, &args).await,
        Commands::Styles(StylesCommand::Get(args)) => get_style(client, &args).await,
        Commands::Render(RenderCommand::Png(args)) => {
            let text = resolve_text(&args).await?;
            let output = client.render_png(&args.to_request::<Png>(text)).await?;
            write_output(output, &args.output).await.map(drop)
        }
        Commands::Render(RenderCommand::Pdf(args)) => {
            let text = resolve_text(&args).await?;
            let output = client.render_pdf(&args.to_request::<Pdf>(text)).await?;
            write_output(output, &args.output).await.map(drop)
        }
    }
}

async fn list_styles<T: HttpTransport>(
    client: &HandwritingClient<T>,
    args: &ListArgs,
) -> Result<(), CliError> {
    let styles = client.list_styles(&args.to_query()).await?;
    info!(count = styles.len(), "listed styles");

    let mut stdout = std::io::stdout().lock();
    if args.json {
        stdout.write_all(to_json_stable(&styles)?.as_bytes())?;
    } else {
        stdout.write_all(style_table(&styles).as_bytes())?;
    }
    Ok(())
}

async fn get_style<T: HttpTransport>(
    client: &HandwritingClient<T>,
    args: &GetArgs,
) -> Result<(), CliError> {
    let style = client.get_style(&args.id).await?;

    let mut stdout = std::io::stdout().lock();
    if args.json {
        stdout.write_all(to_json_stable(&style)?.as_bytes())?;
    } else {
        stdout.write_all(style_summary(&style).as_bytes())?;
    }
    Ok(())
}

/// Formats styles as a fixed-width table with a header row.
pub fn style_table(styles: &[Style]) -> String {
    let mut table = format!(
        "{:<14} {:<24} {:>8} {:>9} {:>13} {:>5}\n",
        "ID", "TITLE", "NEATNESS", "CURSIVITY", "EMBELLISHMENT", "WIDTH"
    );
    for style in styles {
        let cursivity = style
            .rating_cursivity
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        table.push_str(&format!(
            "{:<14} {:<24} {:>8} {:>9} {:>13} {:>5}\n",
            style.id,
            style.title,
            style.rating_neatness,
            cursivity,
            style.rating_embellishment,
            style.rating_character_width
        ));
    }
    table
}

/// Formats one style as `key: value` lines.
pub fn style_summary(style: &Style) -> String {
    let cursivity = style
        .rating_cursivity
        .map_or_else(|| "-".to_string(), |r| r.to_string());
    format!(
        "id:                 {}\n\
         title:              {}\n\
         created:            {}\n\
         modified:           {}\n\
         neatness:           {}\n\
         cursivity:          {}\n\
         embellishment:      {}\n\
         character width:    {}\n",
        style.id,
        style.title,
        style.created.to_rfc3339(),
        style.modified.to_rfc3339(),
        style.rating_neatness,
        cursivity,
        style.rating_embellishment,
        style.rating_character_width,
    )
}

/// Returns the `--text` value or reads all of stdin.
async fn resolve_text(args: &RenderArgs) -> Result<String, CliError> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

/// Streams rendered output to `target`, where `-` means stdout.
///
/// Returns the number of bytes written.
pub async fn write_output(output: RenderedOutput, target: &Path) -> Result<u64, CliError> {
    let mut writer: Box<dyn AsyncWrite + Unpin + Send> = if target == Path::new("-") {
        Box::new(tokio::io::stdout())
    } else {
        Box::new(tokio::fs::File::create(target).await?)
    };

    let content_type = output.content_type().map(str::to_string);
    let written = output.write_to(&mut writer).await?;
    info!(
        bytes = written,
        content_type = content_type.as_deref().unwrap_or("unknown"),
        target = %target.display(),
        "wrote rendered output"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use handwriting_application::ResponseBody;
    use pretty_assertions::assert_eq;

    fn style(id: &str, title: &str, cursivity: Option<i32>) -> Style {
        let mut value = serde_json::json!({
            "id": id,
            "title": title,
            "date_created": "2015-04-14T21:54:17Z",
            "date_modified": "2015-09-02T19:35:40Z",
            "rating_neatness": 1569,
            "rating_embellishment": 1381,
            "rating_character_width": 1446
        });
        if let Some(cursivity) = cursivity {
            value["rating_cursivity"] = cursivity.into();
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_style_table_has_header_and_rows() {
        let table = style_table(&[
            style("2D5S46A80003", "Perry", Some(1216)),
            style("43ATEQMR0027", "Tremont", None),
        ]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("2D5S46A80003   Perry"));
        assert!(lines[1].contains("1216"));
        assert!(lines[2].contains(" - "));
    }

    #[test]
    fn test_style_summary() {
        let summary = style_summary(&style("2D5S46A80003", "Perry", None));
        assert!(summary.contains("title:              Perry\n"));
        assert!(summary.contains("created:            2015-04-14T21:54:17+00:00\n"));
        assert!(summary.contains("cursivity:          -\n"));
    }

    #[tokio::test]
    async fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.png");
        let bytes = b"\x89PNG\r\n\x1a\nrest".to_vec();
        let output = RenderedOutput::new(
            Some("image/png".to_string()),
            ResponseBody::from_bytes(bytes.clone()),
        );

        let written = write_output(output, &path).await.unwrap();

        assert_eq!(written, bytes.len() as u64);
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_write_output_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");
        let output = RenderedOutput::new(None, ResponseBody::from_bytes(b"%PDF".to_vec()));

        let err = write_output(output, &path).await.unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
