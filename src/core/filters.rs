use crate::models::{Brief, Creative, FilterReason};

/// Check the region hard filter
///
/// Passes when the brief has no region constraint ("Global" or absent), or
/// when the creative's country or city contains the region, ignoring case.
#[inline]
pub fn matches_region(creative: &Creative, brief: &Brief) -> bool {
    let Some(region) = brief.region_constraint() else {
        return true;
    };

    let region = region.to_lowercase();
    creative.country.to_lowercase().contains(&region)
        || creative.city.to_lowercase().contains(&region)
}

/// Check the medium/format hard filter
///
/// At least one of the brief's formats must be a medium the creative works in.
/// Formats are lowercased; roster mediums are stored lowercase and compared as-is.
#[inline]
pub fn matches_medium(creative: &Creative, brief: &Brief) -> bool {
    brief.formats.iter().any(|format| {
        let format = format.to_lowercase();
        creative.mediums.iter().any(|m| *m == format)
    })
}

/// Run the hard filters in order, returning the first one that rejects
#[inline]
pub fn apply_hard_filters(creative: &Creative, brief: &Brief) -> Option<FilterReason> {
    if !matches_region(creative, brief) {
        return Some(FilterReason::Region);
    }

    if !matches_medium(creative, brief) {
        return Some(FilterReason::Medium);
    }

    None
}
