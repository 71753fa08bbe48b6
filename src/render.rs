use html_escape::{encode_double_quoted_attribute, encode_text};
use model::{FEATURE_NAMES, InputRecord};

const TEMPLATE: &str = include_str!("../templates/manual_predict.html");
const PREDICTION_BLOCK: &str = "{{prediction_block}}";

/// What the prediction page shows besides the empty form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// The message shown below the form.
    pub prediction_text: Option<String>,
    /// The readings the form gets repopulated with.
    pub values: Option<InputRecord>,
}

impl Page {
    /// The bare form, with no inputs and no prediction.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A message with an empty form, used when the submitted readings couldn't be parsed.
    pub fn message<S: Into<String>>(text: S) -> Self {
        Self {
            prediction_text: Some(text.into()),
            values: None,
        }
    }

    /// A prediction along with the readings it was computed from.
    pub fn prediction<S: Into<String>>(text: S, values: InputRecord) -> Self {
        Self {
            prediction_text: Some(text.into()),
            values: Some(values),
        }
    }

    /// Renders the page into HTML. Every substituted value is escaped.
    pub fn render(&self) -> String {
        let mut html = TEMPLATE.to_string();

        for (i, name) in FEATURE_NAMES.iter().enumerate() {
            let value = self
                .values
                .map(|record| record.values()[i].to_string())
                .unwrap_or_default();

            html = html.replace(
                &format!("{{{{{name}}}}}"),
                &encode_double_quoted_attribute(&value),
            );
        }

        let block = match &self.prediction_text {
            Some(text) => format!(
                "    <div class=\"prediction\" id=\"prediction_text\">{}</div>",
                encode_text(text)
            ),
            None => String::new(),
        };

        html.replace(PREDICTION_BLOCK, &block)
    }
}
