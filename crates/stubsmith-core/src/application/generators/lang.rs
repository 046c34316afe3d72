use tracing::instrument;

use super::{GenerationOutcome, Generator};
use crate::{
    application::services::WritePolicy,
    domain::{ArtifactKind, InputValidator, Substitutions},
    error::StubsmithResult,
};

const EMPTY_JSON: &str = "{\n    \n}";

/// Arguments of `lang-make`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangRequest {
    /// Required unless `json` is set.
    pub name: Option<String>,
    pub locale: String,
    /// Write `<locale>.json` instead of a PHP array file.
    pub json: bool,
}

impl LangRequest {
    pub fn php(name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            locale: locale.into(),
            json: false,
        }
    }

    pub fn json(locale: impl Into<String>) -> Self {
        Self {
            name: None,
            locale: locale.into(),
            json: true,
        }
    }
}

impl Generator {
    /// `lang-make`: `resources/lang/<locale>/<name>.php` or
    /// `resources/lang/<locale>.json`.
    #[instrument(skip(self, policy), fields(locale = %request.locale, json = request.json))]
    pub fn make_lang(
        &self,
        request: &LangRequest,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        InputValidator::locale(&request.locale)?;
        let lang_dir = self.layout.kind_dir(ArtifactKind::LangFile, None);

        let (path, content) = if request.json {
            let path = lang_dir.join(format!("{}.json", request.locale));
            (path, EMPTY_JSON.to_string())
        } else {
            let name = InputValidator::required(request.name.as_deref(), "name")?;
            InputValidator::lang_name(name)?;

            let path = lang_dir.join(&request.locale).join(format!("{name}.php"));
            (path, self.render("lang", &Substitutions::new())?)
        };

        let outcome = self
            .materializer()
            .materialize(ArtifactKind::LangFile, &path, &content, policy)?;
        Ok(outcome.into())
    }
}
