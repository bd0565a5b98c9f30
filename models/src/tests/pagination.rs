use crate::{ListParams, Paginated, Pagination};

fn pagination(current_page: u32, last_page: u32, per_page: u32) -> Pagination {
    Pagination {
        total: u64::from(last_page * per_page),
        per_page,
        current_page,
        last_page,
        next_page_url: None,
        prev_page_url: None,
    }
}

/// **VALUE**: Verifies that an envelope claiming a page past the end is rejected.
///
/// **WHY THIS MATTERS**: The list controller trusts `last_page` for end-of-list detection.
///
/// **BUG THIS CATCHES**: Would catch if the `current_page <= last_page` check is removed.
#[test]
fn given_current_page_past_last_page_when_validated_then_returns_error() {
    let page: Paginated<u32> = Paginated {
        data: vec![],
        pagination: pagination(4, 3, 10),
    };

    assert!(page.validate().is_err());
}

#[test]
fn given_more_items_than_per_page_when_validated_then_returns_error() {
    let page = Paginated {
        data: vec![1, 2, 3],
        pagination: pagination(1, 1, 2),
    };

    assert!(page.validate().is_err());
}

/// **VALUE**: Verifies that an empty result set with `last_page = 0` is accepted.
///
/// **WHY THIS MATTERS**: Some backends report zero pages for zero rows while still
/// answering page 1. That is an empty list, not a malformed response.
///
/// **BUG THIS CATCHES**: Would catch if every empty search turned into an error alert.
#[test]
fn given_empty_result_with_zero_last_page_when_validated_then_is_ok() {
    let page: Paginated<u32> = Paginated {
        data: vec![],
        pagination: pagination(1, 0, 10),
    };

    assert!(page.validate().is_ok());
    assert!(!page.pagination.has_next());
}

#[test]
fn given_envelope_json_when_deserialized_then_optional_urls_default() {
    let json = serde_json::json!({
        "data": [1, 2],
        "pagination": {
            "total": 12,
            "per_page": 10,
            "current_page": 2,
            "last_page": 2
        }
    });

    let page: Paginated<u32> = serde_json::from_value(json).unwrap();

    assert_eq!(page.data, vec![1, 2]);
    assert_eq!(page.pagination.next_page_url, None);
    assert!(!page.pagination.has_next());
}

#[test]
fn given_list_params_when_serialized_then_exposes_search_page_limit() {
    let params = ListParams::first_page("milk", 10).with_page(3);

    let value = serde_json::to_value(&params).unwrap();

    assert_eq!(
        value,
        serde_json::json!({"search": "milk", "page": 3, "limit": 10})
    );
}
