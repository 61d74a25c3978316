//! Hotel-search filter state for StayScout.
//!
//! [`FilterDraft`] holds all user-editable filter criteria while the panel
//! is open. [`FilterValues`] is the stringly-typed record decoded from a
//! query mapping — previously-applied filters used to seed a fresh draft.
//!
//! Each query parameter is emitted only when its field differs from the
//! field default, decided by an explicit per-field predicate. Coercion from
//! [`FilterValues`] back into a draft is lenient: values that fail to parse
//! fall back to the field default with a logged warning.

use chrono::NaiveDate;

use crate::core::query::{self, QueryMap};
use crate::util::constants;
use crate::util::error::{number_err, Result};
use crate::util::time;

// ── Price range ─────────────────────────────────────────────────────────

/// Inclusive nightly price bounds selected on the slider pair.
///
/// The default `[PRICE_MIN, PRICE_MAX]` span means "price not filtered".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: constants::PRICE_MIN,
            max: constants::PRICE_MAX,
        }
    }
}

impl PriceRange {
    /// Swap the bounds if they are inverted, so `min <= max` always holds.
    pub fn ordered(self) -> Self {
        if self.min <= self.max {
            self
        } else {
            Self {
                min: self.max,
                max: self.min,
            }
        }
    }

    /// Clamp both bounds into the slider's span, then order them.
    pub fn clamped(self) -> Self {
        Self {
            min: self.min.clamp(constants::PRICE_MIN, constants::PRICE_MAX),
            max: self.max.clamp(constants::PRICE_MIN, constants::PRICE_MAX),
        }
        .ordered()
    }

    /// `true` if the range covers the whole slider span (no price filter).
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

// ── Previously-applied filter values ────────────────────────────────────

/// The stringly-typed filter record carried by a query mapping.
///
/// All fields are optional; `price` is a two-element array of stringified
/// bounds. This is the shape the results view decodes and the shape used to
/// seed a [`FilterDraft`] when the panel opens.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterValues {
    pub going_to: Option<String>,
    pub travelers: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub price: Option<[String; 2]>,
    pub stars: Option<String>,
}

impl FilterValues {
    /// Decode a query mapping into filter values.
    ///
    /// A `price` key with anything other than exactly two values is
    /// discarded — the range widget always reports a pair, so a single
    /// value can only come from a malformed URL.
    pub fn from_query(query: &QueryMap) -> Self {
        let price = {
            let bounds = query.all(query::KEY_PRICE);
            if bounds.len() == 2 {
                Some([bounds[0].to_owned(), bounds[1].to_owned()])
            } else {
                if !bounds.is_empty() {
                    tracing::warn!("discarding price filter with {} value(s)", bounds.len());
                }
                None
            }
        };

        Self {
            going_to: query.first(query::KEY_GOING_TO).map(str::to_owned),
            travelers: query.first(query::KEY_TRAVELERS).map(str::to_owned),
            check_in: query.first(query::KEY_CHECK_IN).map(str::to_owned),
            check_out: query.first(query::KEY_CHECK_OUT).map(str::to_owned),
            price,
            stars: query.first(query::KEY_STARS).map(str::to_owned),
        }
    }
}

// ── Filter draft ────────────────────────────────────────────────────────

/// All filter criteria editable in the panel.
///
/// Text fields hold whatever the input widget yields, unvalidated; the
/// traveler count in particular has no enforced bounds. Typed fields are
/// kept within their constraints by [`FilterDraft::normalize_dates`] and
/// the widgets themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    /// Free-text destination. Empty = unset.
    pub going_to: String,

    /// Raw traveler-count input. Empty = unset, otherwise passed through
    /// verbatim.
    pub travelers: String,

    /// Check-in date. Normalised to be no earlier than today.
    pub check_in: Option<NaiveDate>,

    /// Check-out date. Normalised to be at least [`constants::MIN_NIGHTS`]
    /// after check-in.
    pub check_out: Option<NaiveDate>,

    /// Nightly price bounds.
    pub price: PriceRange,

    /// Minimum star rating, 0–5. 0 = no filter.
    pub stars: u8,
}

impl FilterDraft {
    /// Seed a draft from previously-applied filter values.
    ///
    /// Coercion is lenient: an unparseable date or number falls back to the
    /// field default with a warning, star ratings clamp to 0–5, and price
    /// pairs are clamped into the slider span with inverted bounds swapped.
    pub fn from_values(values: &FilterValues) -> Self {
        let going_to = values
            .going_to
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned();
        let travelers = values
            .travelers
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned();

        let check_in = values.check_in.as_deref().and_then(parse_date_lenient);
        let check_out = values.check_out.as_deref().and_then(parse_date_lenient);

        let price = match &values.price {
            Some([min, max]) => match parse_price_pair(min, max) {
                Ok(range) => range,
                Err(e) => {
                    tracing::warn!("ignoring price filter: {e}");
                    PriceRange::default()
                }
            },
            None => PriceRange::default(),
        };

        let stars = match values.stars.as_deref() {
            Some(raw) => match parse_stars(raw) {
                Ok(stars) => stars,
                Err(e) => {
                    tracing::warn!("ignoring star filter: {e}");
                    0
                }
            },
            None => 0,
        };

        Self {
            going_to,
            travelers,
            check_in,
            check_out,
            price,
            stars,
        }
    }

    /// Build the query-parameter mapping for this draft.
    ///
    /// Every field is included only when meaningfully set — that is, when it
    /// differs from the field default:
    /// - `goingTo` / `travelers`: non-empty after trimming
    /// - `price`: bounds differ from `[PRICE_MIN, PRICE_MAX]`, encoded as a
    ///   two-element array
    /// - `stars`: non-zero
    /// - `checkIn` / `checkOut`: set, encoded as ISO-8601 dates
    pub fn to_query(&self) -> QueryMap {
        let mut map = QueryMap::new();

        if self.has_destination() {
            map.append(query::KEY_GOING_TO, self.going_to.trim());
        }
        if self.has_travelers() {
            map.append(query::KEY_TRAVELERS, self.travelers.trim());
        }
        if self.has_price() {
            map.append_all(
                query::KEY_PRICE,
                [self.price.min.to_string(), self.price.max.to_string()],
            );
        }
        if self.has_stars() {
            map.append(query::KEY_STARS, self.stars.to_string());
        }
        if let Some(check_in) = self.check_in {
            map.append(query::KEY_CHECK_IN, time::encode_query_date(check_in));
        }
        if let Some(check_out) = self.check_out {
            map.append(query::KEY_CHECK_OUT, time::encode_query_date(check_out));
        }

        map
    }

    /// Re-establish the date-range constraints after an edit:
    /// check-in never before `today`, check-out at least
    /// [`constants::MIN_NIGHTS`] after check-in (or not before `today` when
    /// no check-in is set).
    pub fn normalize_dates(&mut self, today: NaiveDate) {
        if let Some(check_in) = &mut self.check_in {
            if *check_in < today {
                *check_in = today;
            }
        }

        if let Some(check_out) = &mut self.check_out {
            match self.check_in {
                Some(check_in) => {
                    let earliest = time::min_check_out(check_in);
                    if *check_out < earliest {
                        *check_out = earliest;
                    }
                }
                None => {
                    if *check_out < today {
                        *check_out = today;
                    }
                }
            }
        }
    }

    // ── Per-field "meaningfully set" predicates ─────────────────────

    pub fn has_destination(&self) -> bool {
        !self.going_to.trim().is_empty()
    }

    pub fn has_travelers(&self) -> bool {
        !self.travelers.trim().is_empty()
    }

    pub fn has_dates(&self) -> bool {
        self.check_in.is_some() || self.check_out.is_some()
    }

    pub fn has_price(&self) -> bool {
        !self.price.is_default()
    }

    pub fn has_stars(&self) -> bool {
        self.stars != 0
    }

    /// Number of filter groups that are meaningfully set (0–5). The date
    /// pair counts as one group.
    pub fn active_filter_count(&self) -> usize {
        [
            self.has_destination(),
            self.has_travelers(),
            self.has_dates(),
            self.has_price(),
            self.has_stars(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }

    /// `true` if every field is at its default (no filters set).
    pub fn is_default(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Reset every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ── Coercion helpers ────────────────────────────────────────────────────

/// Parse a query date, logging and discarding values that fail.
fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    match time::parse_query_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("ignoring date filter: {e}");
            None
        }
    }
}

/// Parse a stringified price pair into a clamped, ordered [`PriceRange`].
pub fn parse_price_pair(min: &str, max: &str) -> Result<PriceRange> {
    let min = min
        .trim()
        .parse::<u32>()
        .map_err(|_| number_err("price", min))?;
    let max = max
        .trim()
        .parse::<u32>()
        .map_err(|_| number_err("price", max))?;
    Ok(PriceRange { min, max }.clamped())
}

/// Parse a stringified star rating, clamping to the 0–5 scale.
pub fn parse_stars(raw: &str) -> Result<u8> {
    let stars = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| number_err("stars", raw))?;
    Ok(stars.min(constants::STARS_MAX))
}
