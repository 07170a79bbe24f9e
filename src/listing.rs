//! Client-side search and pagination over the fetched upload list. The
//! backend returns every record in one response; everything here is a
//! plain scan or slice over that in-memory set.

use crate::UploadRecord;

/// Records shown per page on the main listing.
pub const PAGE_SIZE: usize = 12;

/// Width of the numbered-button frame in the pagination bar.
pub const PAGE_FRAME: usize = 10;

/// Case-insensitive substring match across the five searchable fields.
pub fn matches_query(record: &UploadRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    record.course_name.to_lowercase().contains(&query)
        || record.material_type.to_lowercase().contains(&query)
        || record.instructor.to_lowercase().contains(&query)
        || record.batch.to_lowercase().contains(&query)
        || record.remark.to_lowercase().contains(&query)
}

pub fn filter_records(records: &[UploadRecord], query: &str) -> Vec<UploadRecord> {
    records
        .iter()
        .filter(|record| matches_query(record, query))
        .cloned()
        .collect()
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The window of records for a 1-based page number, clamped to the valid
/// range so a stale page (say, after a narrowing search) still renders.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let last_page = page_count(items.len()).max(1);
    let page = page.clamp(1, last_page);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start.min(items.len())..end]
}

/// Page numbers for the numbered buttons: a sliding frame of at most ten
/// pages starting five before the current one, clamped to `[1, max_pages]`.
pub fn page_frame(current: usize, max_pages: usize) -> Vec<usize> {
    if max_pages == 0 {
        return Vec::new();
    }
    let start = current.saturating_sub(5).max(1);
    let end = (start + PAGE_FRAME - 1).min(max_pages);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(course: &str, kind: &str, instructor: &str, batch: &str, remark: &str) -> UploadRecord {
        UploadRecord {
            id: format!("{course}-{kind}-{batch}"),
            course_name: course.to_string(),
            batch: batch.to_string(),
            instructor: instructor.to_string(),
            material_type: kind.to_string(),
            remark: remark.to_string(),
            link: String::new(),
        }
    }

    fn sample() -> Vec<UploadRecord> {
        vec![
            record("CS101", "Quiz", "A. Singh", "2023", "midterm"),
            record("EE220", "Endsem", "R. Gupta", "2022", "solutions"),
            record("MTH102", "Lecture Note", "P. Shunmugaraj", "2023", "week 4"),
        ]
    }

    #[test]
    fn search_is_case_insensitive_across_all_fields() {
        let records = sample();
        assert_eq!(filter_records(&records, "cs101").len(), 1);
        assert_eq!(filter_records(&records, "ENDSEM").len(), 1);
        assert_eq!(filter_records(&records, "gupta").len(), 1);
        assert_eq!(filter_records(&records, "2023").len(), 2);
        assert_eq!(filter_records(&records, "WEEK").len(), 1);
        assert_eq!(filter_records(&records, "nowhere").len(), 0);
    }

    #[test]
    fn empty_query_returns_everything() {
        let records = sample();
        assert_eq!(filter_records(&records, "").len(), records.len());
    }

    #[test]
    fn page_count_is_ceiling_division() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(24), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<u32> = (0..29).collect();
        assert_eq!(page_slice(&items, 1).len(), 12);
        assert_eq!(page_slice(&items, 2).len(), 12);
        assert_eq!(page_slice(&items, 3).len(), 5);
        assert_eq!(page_slice(&items, 3), &items[24..]);

        let exact: Vec<u32> = (0..24).collect();
        assert_eq!(page_slice(&exact, 2).len(), 12);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(page_slice(&items, 0), page_slice(&items, 1));
        assert_eq!(page_slice(&items, 99), &items[..]);
        assert!(page_slice::<u32>(&[], 7).is_empty());
    }

    #[test]
    fn frame_stays_within_bounds() {
        assert_eq!(page_frame(1, 3), vec![1, 2, 3]);
        assert_eq!(page_frame(1, 20), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_frame(8, 20), (3..=12).collect::<Vec<_>>());
        assert_eq!(page_frame(20, 20), (15..=20).collect::<Vec<_>>());
        assert!(page_frame(1, 0).is_empty());
        assert!(page_frame(5, 9).len() <= PAGE_FRAME);
    }
}
