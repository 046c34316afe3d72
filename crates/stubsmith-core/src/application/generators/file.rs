use tracing::instrument;

use super::{GenerationOutcome, Generator};
use crate::{
    application::services::WritePolicy,
    domain::{ArtifactKind, InputValidator},
    error::StubsmithResult,
};

const DEFAULT_EXTENSION: &str = "php";

impl Generator {
    /// `file-make`: an empty file. Dots in `filename` are directory
    /// separators, so `config.app` with `--ext=json` gives `config/app.json`.
    #[instrument(skip(self, policy))]
    pub fn make_file(
        &self,
        filename: &str,
        extension: Option<&str>,
        policy: &WritePolicy,
    ) -> StubsmithResult<GenerationOutcome> {
        InputValidator::plain_filename(filename)?;

        let extension = extension
            .map(|e| e.trim_start_matches('.'))
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_EXTENSION);
        InputValidator::extension(extension)?;

        let mut parts: Vec<&str> = filename.split('.').filter(|p| !p.is_empty()).collect();
        let leaf = parts.pop().unwrap_or(filename);

        let mut path = self.layout.kind_dir(ArtifactKind::File, None);
        path.extend(parts);
        path.push(format!("{leaf}.{extension}"));

        let outcome = self
            .materializer()
            .materialize(ArtifactKind::File, &path, "", policy)?;
        Ok(outcome.into())
    }
}
