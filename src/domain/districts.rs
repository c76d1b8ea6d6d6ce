//! The fixed set of Seoul administrative districts (구) served by the product.
//!
//! This is the canonical district domain: the onboarding wizard offers it
//! whenever no backend override is configured, and the demo weather feed
//! rejects names outside it.

/// All 25 Seoul districts, in Korean alphabetical order.
pub const SEOUL_DISTRICTS: [&str; 25] = [
    "강남구",
    "강동구",
    "강북구",
    "강서구",
    "관악구",
    "광진구",
    "구로구",
    "금천구",
    "노원구",
    "도봉구",
    "동대문구",
    "동작구",
    "마포구",
    "서대문구",
    "서초구",
    "성동구",
    "성북구",
    "송파구",
    "양천구",
    "영등포구",
    "용산구",
    "은평구",
    "종로구",
    "중구",
    "중랑구",
];

/// District preselected before the user picks one.
pub const DEFAULT_DISTRICT: &str = "강남구";

/// True if `name` is one of the 25 served districts.
pub fn is_seoul_district(name: &str) -> bool {
    SEOUL_DISTRICTS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_25_districts() {
        assert_eq!(SEOUL_DISTRICTS.len(), 25);
    }

    #[test]
    fn test_districts_sorted_and_unique() {
        let mut sorted = SEOUL_DISTRICTS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 25);
        assert_eq!(sorted.as_slice(), &SEOUL_DISTRICTS[..]);
    }

    #[test]
    fn test_membership() {
        assert!(is_seoul_district("강남구"));
        assert!(is_seoul_district("중랑구"));
        assert!(!is_seoul_district("판교"));
        assert!(!is_seoul_district(""));
        assert!(is_seoul_district(DEFAULT_DISTRICT));
    }
}
