use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 15;
/// Paging values are capped so they always bind as a signed 64-bit integer.
pub const MAX_PAGING_VALUE: u64 = i64::MAX as u64;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw, untrusted search input as it arrives from a query string or JSON body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchParamsInput {
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default)]
    pub per_page: Option<Value>,
    #[serde(default)]
    pub sort: Option<Value>,
    #[serde(default)]
    pub sort_dir: Option<Value>,
    #[serde(default)]
    pub filter: Option<Value>,
}

impl SearchParamsInput {
    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn sort_dir(mut self, sort_dir: impl Into<Value>) -> Self {
        self.sort_dir = Some(sort_dir.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Canonical search descriptor. Construction never fails: malformed paging
/// input silently falls back to the defaults.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchParams<F = String> {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl SearchParams<String> {
    pub fn create(input: SearchParamsInput) -> Self {
        let filter = input.filter.as_ref().and_then(stringify_non_empty);
        Self::with_filter(&input, filter)
    }
}

impl<F> SearchParams<F> {
    /// Normalizes paging and sorting from `input` and attaches an already
    /// built filter.
    pub fn with_filter(input: &SearchParamsInput, filter: Option<F>) -> Self {
        let sort = input.sort.as_ref().and_then(stringify_non_empty);
        let sort_dir = sort
            .as_ref()
            .map(|_| normalize_sort_dir(input.sort_dir.as_ref()));

        Self {
            page: normalize_positive_integer(input.page.as_ref()).unwrap_or(DEFAULT_PAGE),
            per_page: normalize_positive_integer(input.per_page.as_ref())
                .unwrap_or(DEFAULT_PER_PAGE),
            sort,
            sort_dir,
            filter,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.per_page)
            .min(MAX_PAGING_VALUE)
    }
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self::with_filter(&SearchParamsInput::default(), None)
    }
}

/// Null, missing and empty values become `None`; anything else is rendered
/// as text.
pub fn stringify_non_empty(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn normalize_positive_integer(value: Option<&Value>) -> Option<u64> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || number < 1.0 || number.fract() != 0.0 {
        return None;
    }
    Some((number as u64).min(MAX_PAGING_VALUE))
}

fn normalize_sort_dir(value: Option<&Value>) -> SortDirection {
    match value
        .and_then(stringify_non_empty)
        .map(|dir| dir.to_lowercase())
        .as_deref()
    {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    }
}
