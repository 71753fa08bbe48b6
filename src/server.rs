use std::{collections::HashMap, sync::Arc};

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::Html,
    routing::{get, post},
};
use log::{info, warn};
use model::LoadedModel;
use tokio::{net::TcpListener, signal};

use crate::{
    Config,
    form::parse_record,
    predict::{INVALID_INPUT_MESSAGE, log_record, predict},
    render::Page,
};

/// State shared by every request: the model loaded at startup, if any.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    model: Option<Arc<LoadedModel>>,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    /// * `model` - The loaded model, `None` to serve demo predictions.
    pub fn new(model: Option<LoadedModel>) -> Self {
        Self {
            model: model.map(Arc::new),
        }
    }

    /// Loads the model artifact at the configured path, degrading to demo mode on failure.
    pub fn load(config: &Config) -> Self {
        Self::new(LoadedModel::try_load(&config.model_path))
    }

    /// Returns the loaded model.
    pub fn model(&self) -> Option<&LoadedModel> {
        self.model.as_deref()
    }
}

/// Builds the application's routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/manual_predict", get(home))
        .route("/y_predict", post(y_predict))
        .with_state(state)
}

/// Serves the application until Ctrl-C is received.
///
/// # Errors
/// Returns an error if the address can't be bound or the server fails.
pub async fn serve(config: &Config, state: AppState) -> anyhow::Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("listening at {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("received SIGTERM, shutting down"),
        Err(e) => warn!("cannot listen for shutdown signal: {e}"),
    }
}

async fn home() -> Html<String> {
    Html(Page::empty().render())
}

async fn y_predict(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(e) => {
            warn!("cannot read form body: {e}");
            return Html(Page::message(INVALID_INPUT_MESSAGE).render());
        }
    };

    let record = match parse_record(&fields) {
        Ok(record) => record,
        Err(e) => {
            warn!("invalid input: {e}");
            return Html(Page::message(INVALID_INPUT_MESSAGE).render());
        }
    };
    log_record(&record);

    let prediction_text = predict(state.model(), &record).to_string();
    info!("final prediction text: {prediction_text}");

    Html(Page::prediction(prediction_text, record).render())
}
