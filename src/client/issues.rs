//! Issue, pull request, label, and milestone operations.

use serde::Serialize;

use super::{Client, Result};
use crate::issues::{Issue, Label, Milestone};
use crate::route::Route;

#[derive(Clone, Debug, Serialize)]
struct CreateIssueRequest {
    title: String,
    // None serializes as JSON null, never the text "None".
    body: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
struct CreateMilestoneRequest {
    title: String,
    description: Option<String>,
    due_on: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
struct CreateLabelRequest {
    name: String,
    color: String,
    description: Option<String>,
}

impl Client {
    /// Lists issues of a repository, in server response order.
    pub fn get_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        let route = Route::get(format!("/repos/{}/{}/issues", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Issue::wrap))
    }

    /// Fetches a single issue by number.
    pub fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue> {
        let route = Route::get(
            format!("/repos/{}/{}/issues/{}", owner, repo, number),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Issue::wrap(Some(data)))
    }

    /// Opens a new issue and returns the created resource.
    pub fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: Option<&str>,
    ) -> Result<Issue> {
        let route = Route::post(format!("/repos/{}/{}/issues", owner, repo), self.token());
        let request = CreateIssueRequest {
            title: title.to_owned(),
            body: body.map(str::to_owned),
        };
        let body = serde_json::to_value(request)?;
        let data = self.transport().request(&route, Some(&body))?;
        Ok(Issue::wrap(Some(data)))
    }

    /// Lists pull requests. They share the issue payload shape, so this
    /// returns `Issue` wrappers.
    pub fn get_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        let route = Route::get(format!("/repos/{}/{}/pulls", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Issue::wrap))
    }

    /// Lists labels of a repository.
    pub fn get_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        let route = Route::get(format!("/repos/{}/{}/labels", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Label::wrap))
    }

    /// Creates a label and returns the created resource.
    pub fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: Option<&str>,
    ) -> Result<Label> {
        let route = Route::post(format!("/repos/{}/{}/labels", owner, repo), self.token());
        let request = CreateLabelRequest {
            name: name.to_owned(),
            color: color.to_owned(),
            description: description.map(str::to_owned),
        };
        let body = serde_json::to_value(request)?;
        let data = self.transport().request(&route, Some(&body))?;
        Ok(Label::wrap(Some(data)))
    }

    /// Lists milestones of a repository.
    pub fn get_milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>> {
        let route = Route::get(
            format!("/repos/{}/{}/milestones", owner, repo),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Milestone::wrap))
    }

    /// Creates a milestone and returns the created resource.
    pub fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        description: Option<&str>,
        due_on: Option<&str>,
    ) -> Result<Milestone> {
        let route = Route::post(
            format!("/repos/{}/{}/milestones", owner, repo),
            self.token(),
        );
        let request = CreateMilestoneRequest {
            title: title.to_owned(),
            description: description.map(str::to_owned),
            due_on: due_on.map(str::to_owned),
        };
        let body = serde_json::to_value(request)?;
        let data = self.transport().request(&route, Some(&body))?;
        Ok(Milestone::wrap(Some(data)))
    }
}
