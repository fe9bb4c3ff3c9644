use super::*;
use ats::types::Source;

#[test]
fn row_cells_follow_header_order() {
    let professional = Professional {
        id: "f3865103-00c3-4b3a-9ad7-f6773e8167d1".into(),
        full_name: "Bob Johnson".into(),
        email: "bob@example.com".into(),
        company_name: "Dev Agency".into(),
        job_title: "Product Manager".into(),
        phone: "555-123-4567".into(),
        source: Source::Internal,
        created_at: "2024-01-03T00:00:00Z".into(),
    };

    assert_eq!(
        row_cells(&professional),
        [
            "Bob Johnson".to_owned(),
            "bob@example.com".to_owned(),
            "Dev Agency".to_owned(),
            "Product Manager".to_owned(),
            "555-123-4567".to_owned(),
            "internal".to_owned(),
        ]
    );
    assert_eq!(row_cells(&professional).len(), COLUMN_HEADERS.len());
}
