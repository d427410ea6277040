//! Repository-scoped reads: commits, branches, contributors, user repos,
//! and topics.

use serde::Serialize;
use serde_json::Value;

use super::{Client, Result};
use crate::commit::Commit;
use crate::repo::{Branch, Repository};
use crate::route::Route;
use crate::user::User;

#[derive(Clone, Debug, Serialize)]
struct ReplaceTopicsRequest {
    names: Vec<String>,
}

impl Client {
    /// Lists commits on a repository, in server response order.
    pub fn get_commits(&self, owner: &str, repo: &str) -> Result<Vec<Commit>> {
        let route = Route::get(format!("/repos/{}/{}/commits", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Commit::wrap))
    }

    /// Fetches a single commit by sha.
    pub fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit> {
        let route = Route::get(
            format!("/repos/{}/{}/commits/{}", owner, repo, sha),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Commit::wrap(Some(data)))
    }

    /// Lists branches of a repository.
    pub fn get_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>> {
        let route = Route::get(format!("/repos/{}/{}/branches", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Branch::wrap))
    }

    /// Lists contributors of a repository.
    pub fn get_contributors(&self, owner: &str, repo: &str) -> Result<Vec<User>> {
        let route = Route::get(
            format!("/repos/{}/{}/contributors", owner, repo),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, User::wrap))
    }

    /// Lists the public repositories of a user.
    pub fn get_repositories_for_user(&self, username: &str) -> Result<Vec<Repository>> {
        let route = Route::get(format!("/users/{}/repos", username), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Repository::wrap))
    }

    /// Fetches a repository's topics. A response without `names` is an
    /// empty list.
    pub fn get_repo_topics(&self, owner: &str, repo: &str) -> Result<Vec<String>> {
        let route = Route::get(format!("/repos/{}/{}/topics", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(topic_names(&data))
    }

    /// Replaces all topics on a repository, returning the new set.
    pub fn replace_repo_topics(
        &self,
        owner: &str,
        repo: &str,
        names: Vec<String>,
    ) -> Result<Vec<String>> {
        let route = Route::put(format!("/repos/{}/{}/topics", owner, repo), self.token());
        let body = serde_json::to_value(ReplaceTopicsRequest { names })?;
        let data = self.transport().request(&route, Some(&body))?;
        Ok(topic_names(&data))
    }
}

fn topic_names(data: &Value) -> Vec<String> {
    data.get("names")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::super::testing::scripted_client;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn get_commits_preserves_order() {
        let (client, log) = scripted_client(
            200,
            r#"[{"sha": "aaa"}, {"sha": "bbb"}, {"sha": "ccc"}]"#,
            None,
        );
        let commits = client.get_commits("octocat", "Hello-World").unwrap();

        let shas: Vec<_> = commits.iter().map(|c| c.sha().unwrap()).collect();
        assert_eq!(shas, ["aaa", "bbb", "ccc"]);

        let requests = log.lock().unwrap();
        assert_eq!(
            requests[0].url,
            "https://api.github.com/repos/octocat/Hello-World/commits"
        );
    }

    #[test]
    fn get_commit_by_sha() {
        let (client, log) = scripted_client(200, r#"{"sha": "abc123"}"#, None);
        let commit = client.get_commit("o", "r", "abc123").unwrap();

        assert_eq!(commit.sha(), Some("abc123"));
        assert_eq!(
            log.lock().unwrap()[0].url,
            "https://api.github.com/repos/o/r/commits/abc123"
        );
    }

    #[test]
    fn get_branches() {
        let (client, _) = scripted_client(
            200,
            r#"[{"name": "master", "protected": true}, {"name": "dev"}]"#,
            None,
        );
        let branches = client.get_branches("o", "r").unwrap();
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].name(), Some("master"));
        assert_eq!(branches[1].protected(), None);
    }

    #[test]
    fn get_contributors() {
        let (client, _) = scripted_client(200, r#"[{"login": "octocat"}]"#, None);
        let contributors = client.get_contributors("o", "r").unwrap();
        assert_eq!(contributors.len(), 1);
        assert_eq!(contributors[0].login(), Some("octocat"));
    }

    #[test]
    fn get_repositories_for_user() {
        let (client, log) = scripted_client(200, r#"[{"name": "a"}, {"name": "b"}]"#, None);
        let repos = client.get_repositories_for_user("octocat").unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(
            log.lock().unwrap()[0].url,
            "https://api.github.com/users/octocat/repos"
        );
    }

    #[test]
    fn topics_round_trip() {
        let (client, _) = scripted_client(200, r#"{"names": ["api", "rest"]}"#, None);
        let topics = client.get_repo_topics("o", "r").unwrap();
        assert_eq!(topics, ["api", "rest"]);
    }

    #[test]
    fn topics_missing_names_is_empty() {
        let (client, _) = scripted_client(200, "{}", None);
        assert!(client.get_repo_topics("o", "r").unwrap().is_empty());
    }

    #[test]
    fn replace_topics_sends_names_body() {
        let (client, log) = scripted_client(200, r#"{"names": ["one"]}"#, Some("t"));
        let topics = client
            .replace_repo_topics("o", "r", vec!["one".to_owned()])
            .unwrap();
        assert_eq!(topics, ["one"]);

        let requests = log.lock().unwrap();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].url, "https://api.github.com/repos/o/r/topics");
        assert_eq!(requests[0].body, Some(json!({"names": ["one"]})));
    }

    #[test]
    fn non_array_list_body_is_empty() {
        let (client, _) = scripted_client(200, r#"{"message": "weird"}"#, None);
        assert!(client.get_commits("o", "r").unwrap().is_empty());
    }
}
