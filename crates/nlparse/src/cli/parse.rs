//! `nlparse parse` command implementation.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use nlparse::{Parser, ParserRequest, create_parser_from_request};

/// Arguments of the parse command.
pub struct ParseArgs {
    pub text: Option<String>,
    pub language: Option<String>,
    pub lemmas: bool,
    pub resolve_corefs: bool,
    pub request: Option<PathBuf>,
    pub json: bool,
}

/// Run the parse command.
pub fn run(args: &ParseArgs) -> anyhow::Result<()> {
    let request = build_request(args)?;
    let parser = create_parser_from_request(&request)?;

    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    let parse = parser.parse(&text)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&parse)?);
    } else {
        print!("{parse}");
    }
    Ok(())
}

/// Merge the request file (if any) with command-line options.
///
/// Flags given on the command line switch features on; they never switch off
/// what the request file enabled.
fn build_request(args: &ParseArgs) -> anyhow::Result<ParserRequest> {
    let mut request = match (&args.request, &args.language) {
        (Some(path), _) => ParserRequest::load(path)
            .with_context(|| format!("failed to load request {}", path.display()))?,
        (None, Some(language)) => ParserRequest::new(language.clone()),
        (None, None) => bail!("either --language or --request is required"),
    };

    if let Some(language) = &args.language {
        request.language.clone_from(language);
    }
    request.config.lemmas |= args.lemmas;
    request.config.resolve_corefs |= args.resolve_corefs;
    tracing::debug!(?request, "Resolved parser request");
    Ok(request)
}
