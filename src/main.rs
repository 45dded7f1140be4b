use anyhow::Context;
use clap::Parser;
use geoengine_client::config::Command;
use geoengine_client::models::{DatasetListing, ProjectListing, TaskStatusWithId};
use geoengine_client::utils::error::ClientError;
use geoengine_client::utils::output::{render, OutputFormat};
use geoengine_client::utils::{logger, validation::Validate};
use geoengine_client::{
    api_surface, CliConfig, GeoEngineClient, ListDatasetsParams, ListProjectsParams,
    ListTasksParams,
};
use serde::Serialize;
use std::time::Duration;

const TASK_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Serialize)]
struct DatasetRow {
    name: String,
    display_name: String,
    source_operator: String,
    tags: String,
}

impl From<DatasetListing> for DatasetRow {
    fn from(dataset: DatasetListing) -> Self {
        Self {
            name: dataset.name,
            display_name: dataset.display_name,
            source_operator: dataset.source_operator,
            tags: dataset.tags.join(";"),
        }
    }
}

#[derive(Serialize)]
struct ProjectRow {
    id: String,
    name: String,
    layers: usize,
    changed: String,
}

impl From<ProjectListing> for ProjectRow {
    fn from(project: ProjectListing) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name,
            layers: project.layer_names.len(),
            changed: project.changed.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct TaskRow {
    task_id: String,
    status: &'static str,
}

impl From<TaskStatusWithId> for TaskRow {
    fn from(task: TaskStatusWithId) -> Self {
        Self {
            task_id: task.task_id.to_string(),
            status: task.status.name(),
        }
    }
}

#[derive(Serialize)]
struct SymbolRow {
    symbol: &'static str,
    group: &'static str,
}

fn print_rows<R: Serialize>(rows: &[R], format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render(rows, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: &CliConfig) -> anyhow::Result<()> {
    if let Command::Surface = cli.command {
        let surface = api_surface();
        surface.ensure_unambiguous()?;
        let rows: Vec<SymbolRow> = surface
            .symbols()
            .filter_map(|symbol| surface.resolve(symbol).map(|group| SymbolRow { symbol, group }))
            .collect();
        return print_rows(&rows, cli.format);
    }

    let config = cli.client_config()?;
    tracing::debug!("Using server {}", config.server.base_url);

    match &cli.command {
        Command::Login { email, password } => {
            let client = GeoEngineClient::new(config.to_configuration()?);
            let credentials = geoengine_client::models::UserCredentials {
                email: email.clone(),
                password: password.clone(),
            };
            let (_, session) = client
                .login(&credentials)
                .await
                .with_context(|| format!("Login as {} failed", email))?;
            print_json(&session)
        }
        Command::Anonymous => {
            let client = GeoEngineClient::new(config.to_configuration()?);
            let (_, session) = client.anonymous().await?;
            print_json(&session)
        }
        command => {
            let client = GeoEngineClient::connect(&config).await?;
            run_authenticated(&client, command, cli.format).await
        }
    }
}

async fn run_authenticated(
    client: &GeoEngineClient,
    command: &Command,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Command::Info => print_json(&client.general().server_info().await?),
        Command::Datasets {
            limit,
            offset,
            filter,
        } => {
            let params = ListDatasetsParams {
                limit: *limit,
                offset: *offset,
                filter: filter.clone(),
                ..Default::default()
            };
            let rows: Vec<DatasetRow> = client
                .datasets()
                .list(&params)
                .await?
                .into_iter()
                .map(DatasetRow::from)
                .collect();
            print_rows(&rows, format)
        }
        Command::Projects { limit, offset } => {
            let params = ListProjectsParams {
                limit: *limit,
                offset: *offset,
                ..Default::default()
            };
            let rows: Vec<ProjectRow> = client
                .projects()
                .list(params)
                .await?
                .into_iter()
                .map(ProjectRow::from)
                .collect();
            print_rows(&rows, format)
        }
        Command::Tasks { limit, offset } => {
            let params = ListTasksParams {
                limit: *limit,
                offset: *offset,
                ..Default::default()
            };
            let rows: Vec<TaskRow> = client
                .tasks()
                .list(params)
                .await?
                .into_iter()
                .map(TaskRow::from)
                .collect();
            print_rows(&rows, format)
        }
        Command::TaskStatus { task, wait } => {
            let status = match wait {
                Some(seconds) => {
                    client
                        .tasks()
                        .wait_for_completion(*task, TASK_POLL_INTERVAL, Duration::from_secs(*seconds))
                        .await?
                }
                None => client.tasks().status(*task).await?,
            };
            print_json(&status)
        }
        Command::Srs { srs } => {
            print_json(&client.spatial_references().specification(srs).await?)
        }
        Command::Login { .. } | Command::Anonymous | Command::Surface => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let logging = cli.client_config().ok().and_then(|config| config.logging);
    match &logging {
        Some(logging) if logging.json => logger::init_json_logger(logging.level.as_deref()),
        logging => logger::init_cli_logger(
            cli.verbose,
            logging.as_ref().and_then(|l| l.level.as_deref()),
        ),
    }
    tracing::debug!("Output format: {:?}", cli.format);

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    if let Err(e) = run(&cli).await {
        match e.downcast_ref::<ClientError>() {
            Some(client_error) => {
                let severity = client_error.severity();
                tracing::error!("{:#} (Severity: {:?})", e, severity);
                eprintln!("{}", client_error.user_friendly_message());
                std::process::exit(severity.exit_code());
            }
            None => {
                tracing::error!("{:#}", e);
                eprintln!("{:#}", e);
                std::process::exit(1);
            }
        }
    }
}
