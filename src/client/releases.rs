//! Release operations.

use serde::Serialize;

use super::{Client, Result};
use crate::release::Release;
use crate::route::Route;

#[derive(Clone, Debug, Serialize)]
struct CreateReleaseRequest {
    tag_name: String,
    name: Option<String>,
    body: Option<String>,
    draft: bool,
    prerelease: bool,
}

impl Client {
    /// Lists releases of a repository, in server response order.
    pub fn get_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        let route = Route::get(format!("/repos/{}/{}/releases", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Release::wrap))
    }

    /// Fetches a single release by id.
    pub fn get_release(&self, owner: &str, repo: &str, id: u64) -> Result<Release> {
        let route = Route::get(
            format!("/repos/{}/{}/releases/{}", owner, repo, id),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Release::wrap(Some(data)))
    }

    /// Creates a release from a tag and returns the created resource.
    pub fn create_release(
        &self,
        owner: &str,
        repo: &str,
        tag_name: &str,
        name: Option<&str>,
        body: Option<&str>,
        draft: bool,
        prerelease: bool,
    ) -> Result<Release> {
        let route = Route::post(format!("/repos/{}/{}/releases", owner, repo), self.token());
        let request = CreateReleaseRequest {
            tag_name: tag_name.to_owned(),
            name: name.map(str::to_owned),
            body: body.map(str::to_owned),
            draft,
            prerelease,
        };
        let body = serde_json::to_value(request)?;
        let data = self.transport().request(&route, Some(&body))?;
        Ok(Release::wrap(Some(data)))
    }
}
