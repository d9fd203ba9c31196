use std::io::Write;
use std::sync::Arc;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{ClientConfig, GoolabsClient};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::input::{clean_app_id, clean_length, clean_review, clean_text, to_pipe_filter};
use crate::cli::{output, render};
use crate::config::{global_config_path, Settings};
use crate::domain::{Operation, Params};
use crate::infrastructure::HttpTransport;

/// A fully resolved API call, ready to hand to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub operation: Operation,
    pub params: Params,
    pub app_id: String,
    pub json: bool,
}

pub fn execute_command(
    cli: &Cli,
    settings: &Settings,
    transport: Arc<dyn HttpTransport>,
    out: &mut dyn Write,
) -> CliResult<()> {
    match &cli.command {
        Commands::Config { command } => _config(command, settings, out),
        Commands::Completion { shell } => _completion(*shell, out),
        command => {
            let request = build_request(command, settings)?;
            _call(request, settings, transport, out)
        }
    }
}

/// Resolve credential, input and parameters for an API subcommand.
///
/// All usage errors surface here, before a client exists.
pub fn build_request(command: &Commands, settings: &Settings) -> CliResult<ApiRequest> {
    let (operation, (api, app_id), params) = match command {
        Commands::Morph {
            sentence,
            info_filter,
            pos_filter,
            file,
            api,
        } => {
            let app_id = clean_app_id(api.app_id.as_deref(), settings)?;
            let sentence = clean_text(sentence.as_deref(), file.as_deref(), "sentence")?;
            let params = Params::new()
                .with("sentence", sentence)
                .with("info_filter", to_pipe_filter(info_filter.as_deref()))
                .with("pos_filter", to_pipe_filter(pos_filter.as_deref()));
            (Operation::Morph, (api, app_id), params)
        }
        Commands::Similarity { query_pair, api } => {
            let app_id = clean_app_id(api.app_id.as_deref(), settings)?;
            let params = Params::new().with("query_pair", query_pair.clone());
            (Operation::Similarity, (api, app_id), params)
        }
        Commands::Hiragana {
            sentence,
            output_type,
            file,
            api,
        } => {
            let app_id = clean_app_id(api.app_id.as_deref(), settings)?;
            let sentence = clean_text(sentence.as_deref(), file.as_deref(), "sentence")?;
            let params = Params::new()
                .with("sentence", sentence)
                .with("output_type", output_type.as_str());
            (Operation::Hiragana, (api, app_id), params)
        }
        Commands::Entity {
            sentence,
            class_filter,
            file,
            api,
        } => {
            let app_id = clean_app_id(api.app_id.as_deref(), settings)?;
            let sentence = clean_text(sentence.as_deref(), file.as_deref(), "sentence")?;
            let params = Params::new()
                .with("sentence", sentence)
                .with("class_filter", to_pipe_filter(class_filter.as_deref()));
            (Operation::Entity, (api, app_id), params)
        }
        Commands::Shortsum {
            review,
            length,
            file,
            api,
        } => {
            let app_id = clean_app_id(api.app_id.as_deref(), settings)?;
            let review_list = clean_review(review.as_deref(), file.as_deref())?;
            let params = Params::new()
                .with("review_list", review_list)
                .with("length", clean_length(length.as_deref())?);
            (Operation::Shortsum, (api, app_id), params)
        }
        Commands::Keyword {
            title,
            body,
            max_num,
            forcus,
            file,
            api,
        } => {
            let app_id = clean_app_id(api.app_id.as_deref(), settings)?;
            let body = clean_text(body.as_deref(), file.as_deref(), "body")?;
            let params = Params::new()
                .with("title", title.as_str())
                .with("body", body)
                .with("max_num", *max_num)
                .with("forcus", forcus.clone());
            (Operation::Keyword, (api, app_id), params)
        }
        Commands::Chrono {
            sentence,
            doc_time,
            file,
            api,
        } => {
            let app_id = clean_app_id(api.app_id.as_deref(), settings)?;
            let sentence = clean_text(sentence.as_deref(), file.as_deref(), "sentence")?;
            let params = Params::new()
                .with("sentence", sentence)
                .with("doc_time", doc_time.clone());
            (Operation::Chrono, (api, app_id), params)
        }
        Commands::Config { .. } | Commands::Completion { .. } => {
            return Err(CliError::InvalidArgs(
                "subcommand does not call the API".to_string(),
            ));
        }
    };

    Ok(ApiRequest {
        operation,
        params: params.with("request_id", api.request_id.clone()),
        app_id,
        json: api.json_output(),
    })
}

#[instrument(skip_all, fields(operation = %request.operation))]
fn _call(
    request: ApiRequest,
    settings: &Settings,
    transport: Arc<dyn HttpTransport>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let config = ClientConfig::new(request.app_id, settings.client_options());
    let client = GoolabsClient::with_transport(config, transport);

    let response = client.call(request.operation, request.params)?;
    debug!("request_id: {:?}", response.request_id());

    if request.json {
        return output::line(out, &render::format_json(response.json())?);
    }
    output::lines(out, &render::project(request.operation, response.json())?)
}

#[instrument(skip_all)]
fn _config(command: &ConfigCommands, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::line(out, settings.to_redacted_toml()?.trim_end()),
        ConfigCommands::Path => {
            let path = global_config_path().ok_or_else(|| {
                CliError::InvalidArgs("cannot determine config directory".to_string())
            })?;
            output::line(out, &path.display())
        }
    }
}

fn _completion(shell: clap_complete::Shell, out: &mut dyn Write) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    Ok(())
}
