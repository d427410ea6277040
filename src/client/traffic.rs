//! Traffic statistics. These endpoints require push access to the
//! repository; without it Github answers 403, which surfaces as
//! `Error::Forbidden` like any other request.

use super::{Client, Result};
use crate::route::Route;
use crate::traffic::Traffic;

impl Client {
    /// Lists the top referrers over the last 14 days, one `Traffic` entry
    /// per referring site.
    pub fn get_traffic(&self, owner: &str, repo: &str) -> Result<Vec<Traffic>> {
        let route = Route::get(
            format!("/repos/{}/{}/traffic/popular/referrers", owner, repo),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Traffic::wrap))
    }

    /// Fetches the view totals and per-day series for the last 14 days.
    pub fn get_traffic_views(&self, owner: &str, repo: &str) -> Result<Traffic> {
        let route = Route::get(
            format!("/repos/{}/{}/traffic/views", owner, repo),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Traffic::wrap(Some(data)))
    }

    /// Fetches the clone totals and per-day series for the last 14 days.
    pub fn get_traffic_clones(&self, owner: &str, repo: &str) -> Result<Traffic> {
        let route = Route::get(
            format!("/repos/{}/{}/traffic/clones", owner, repo),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Traffic::wrap(Some(data)))
    }
}
