//! Lazy, restartable pagination over full-table scans.
//!
//! [`pages`] turns the repository's single-page `scan_profiles` into a stream
//! that follows continuation tokens until the store reports no further pages.
//! Nothing is requested until the stream is polled, and dropping it stops
//! the chain: no request is issued for a page nobody asked for.

use std::time::Duration;

use tokio_stream::{Stream, StreamExt};

use crate::profile::Profile;

use super::{Page, PageToken, ProfileRepository, RepositoryError, Result, ScanRequest};

/// Streams scan pages starting at `start` (or the beginning of the table).
///
/// Restart a listing by passing the `next` token of the last page that was
/// consumed. An empty token is treated the same as an absent one.
pub fn pages<'a, R>(
    repo: &'a R,
    start: Option<PageToken>,
    limit: Option<u32>,
) -> impl Stream<Item = Result<Page<Profile>>> + Send + 'a
where
    R: ProfileRepository + ?Sized,
{
    async_stream::try_stream! {
        let mut token = start;
        loop {
            let request = match token.take() {
                Some(token) => ScanRequest::after(token, limit),
                None => ScanRequest::first(limit),
            };
            let page = repo.scan_profiles(request).await?;
            let next = page.next.clone().filter(|t| !t.as_str().is_empty());
            yield page;

            match next {
                Some(next) => token = Some(next),
                None => break,
            }
        }
    }
}

/// Drains a page stream into one vector, in the order the pages arrive.
///
/// The first failing page aborts the whole listing and the items collected so
/// far are dropped. With `per_page` set, each page must arrive within that
/// deadline or the listing fails with [`RepositoryError::Timeout`].
pub async fn collect_pages<T, S>(stream: S, per_page: Option<Duration>) -> Result<Vec<T>>
where
    S: Stream<Item = Result<Page<T>>>,
{
    tokio::pin!(stream);

    let mut items = Vec::new();
    loop {
        let next = match per_page {
            Some(deadline) => tokio::time::timeout(deadline, stream.next())
                .await
                .map_err(|_| RepositoryError::Timeout { operation: "Scan" })?,
            None => stream.next().await,
        };

        match next {
            Some(page) => items.extend(page?.items),
            None => break,
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::profile::ProfileDraft;
    use crate::storage::ConditionalUpdate;

    /// Serves a fixed list of profiles in pages keyed by index, and counts the
    /// scan requests it receives.
    struct PagedFixture {
        profiles: Vec<Profile>,
        fail_on_call: Option<usize>,
        delay_on_call: Option<(usize, Duration)>,
        calls: Arc<AtomicUsize>,
    }

    impl PagedFixture {
        fn new(count: usize) -> Self {
            let profiles = (0..count)
                .map(|i| Profile {
                    id: format!("p-{i:03}"),
                    full_name: format!("Cook {i}"),
                    email: format!("cook{i}@example.com"),
                    authored_recipes: vec![],
                    liked_recipes: vec![],
                })
                .collect();
            Self {
                profiles,
                fail_on_call: None,
                delay_on_call: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl ProfileRepository for PagedFixture {
        async fn get_profile(&self, _id: &str) -> Result<Option<Profile>> {
            unimplemented!()
        }

        async fn scan_profiles(&self, request: ScanRequest) -> Result<Page<Profile>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some((on_call, delay)) = self.delay_on_call {
                if call == on_call {
                    tokio::time::sleep(delay).await;
                }
            }
            if self.fail_on_call == Some(call) {
                return Err(RepositoryError::Store("scan exploded".to_string()));
            }

            let start: usize = request
                .start
                .map(|t| t.as_str().parse::<usize>().unwrap() + 1)
                .unwrap_or(0);
            let limit = request.limit.unwrap_or(u32::MAX) as usize;
            let end = (start + limit).min(self.profiles.len());
            let items = self.profiles[start..end].to_vec();
            let next = (end < self.profiles.len()).then(|| PageToken::new((end - 1).to_string()));

            Ok(Page { items, next })
        }

        async fn put_profile(&self, _profile: &Profile) -> Result<()> {
            unimplemented!()
        }

        async fn delete_profile(&self, _id: &str) -> Result<Option<Profile>> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _id: &str,
            _draft: &ProfileDraft,
        ) -> Result<ConditionalUpdate<Profile>> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_collects_every_page_in_order() {
        let repo = PagedFixture::new(7);

        let items = collect_pages(pages(&repo, None, Some(2)), None).await.unwrap();

        assert_eq!(items, repo.profiles);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_single_page_when_no_limit() {
        let repo = PagedFixture::new(3);

        let items = collect_pages(pages(&repo, None, None), None).await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_table_yields_one_empty_page() {
        let repo = PagedFixture::new(0);

        let stream = pages(&repo, None, Some(10));
        tokio::pin!(stream);
        let first = stream.next().await.unwrap().unwrap();

        assert!(first.items.is_empty());
        assert_eq!(first.next, None);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_restarts_from_token() {
        let repo = PagedFixture::new(6);

        let items = collect_pages(pages(&repo, Some(PageToken::new("2")), Some(2)), None)
            .await
            .unwrap();

        assert_eq!(items, repo.profiles[3..].to_vec());
    }

    #[tokio::test]
    async fn test_failure_discards_partial_results() {
        let mut repo = PagedFixture::new(9);
        repo.fail_on_call = Some(3);

        let result = collect_pages(pages(&repo, None, Some(2)), None).await;

        assert_eq!(
            result,
            Err(RepositoryError::Store("scan exploded".to_string()))
        );
        assert_eq!(repo.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_stream_is_lazy() {
        let repo = PagedFixture::new(10);

        let stream = pages(&repo, None, Some(3));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);

        tokio::pin!(stream);
        stream.next().await.unwrap().unwrap();
        drop(stream);

        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_deadline_stops_further_pages() {
        let mut repo = PagedFixture::new(10);
        repo.delay_on_call = Some((2, Duration::from_secs(60)));

        let result = collect_pages(
            pages(&repo, None, Some(3)),
            Some(Duration::from_secs(1)),
        )
        .await;

        assert_eq!(result, Err(RepositoryError::Timeout { operation: "Scan" }));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
    }
}
