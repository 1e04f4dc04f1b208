//! Property tests: what goes into a driver comes back out unchanged.

use proptest::prelude::*;
use tokio::runtime::Runtime;

use tinkersnest_store::{newest_first, SearchFilter};
use tinkersnest_testkit::all_stores;
use tinkersnest_testkit::generators::{post, unique_posts};

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn created_post_is_found_unchanged(post in post()) {
        let rt = runtime();
        for store in all_stores() {
            let found = rt.block_on(async {
                store.create(&post).await.unwrap();
                store.find_by_name(&post.name).await.unwrap()
            });
            prop_assert_eq!(&found, &post, "{}", store.driver_name());
        }
    }

    #[test]
    fn search_is_sorted_and_complete(posts in unique_posts(12)) {
        let rt = runtime();
        let mut expected = posts.clone();
        expected.sort_by(newest_first);

        for store in all_stores() {
            let found = rt.block_on(async {
                for post in &posts {
                    store.create(post).await.unwrap();
                }
                store.search(&SearchFilter::all()).await.unwrap()
            });
            prop_assert_eq!(&found, &expected, "{}", store.driver_name());
        }
    }

    #[test]
    fn author_filter_matches_predicate(posts in unique_posts(12), author in "[a-z]{3,8}") {
        let rt = runtime();
        let filter = SearchFilter::by_author(author);
        let mut expected: Vec<_> = posts.iter().filter(|p| filter.matches(p)).cloned().collect();
        expected.sort_by(newest_first);

        for store in all_stores() {
            let found = rt.block_on(async {
                for post in &posts {
                    store.create(post).await.unwrap();
                }
                store.search(&filter).await.unwrap()
            });
            prop_assert_eq!(&found, &expected, "{}", store.driver_name());
        }
    }
}
