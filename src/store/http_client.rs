use super::*;

impl RestStore {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!(
                "unauthorized (token invalid/expired; set {} or run `firebase login`)",
                self.cfg.token_env
            );
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!("forbidden (insufficient permissions for this project)");
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    pub(super) fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// `{base}/projects/{project}/databases/(default)/documents{suffix}`
    pub(super) fn documents_url(&self, project: &str, suffix: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents{}",
            self.cfg.base_url.trim_end_matches('/'),
            project,
            suffix
        )
    }

    pub(super) fn management_url(&self, path: &str) -> String {
        format!("{}{}", self.cfg.management_url.trim_end_matches('/'), path)
    }
}
