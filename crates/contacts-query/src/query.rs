//! Query builder
//!
//! A [`Query`] collects constraints through consuming setters and is then run
//! with [`Query::find`]. Running borrows the query immutably, so a query can
//! be run any number of times and always issues the same row requests.
//!
//! Constraints on primary-row fields (kind `None`) go into one
//! kind-independent filter. Constraints on kind-specific fields go into a
//! filter per kind. Because a satellite row only carries the columns of its
//! own kind, per-kind filters cannot be combined into a single row request:
//! each one is resolved to a set of entity keys first, and the key sets are
//! intersected before the final read.

use crate::aggregator::Aggregator;
use crate::config::AggregationConfig;
use crate::error::{QueryError, QueryResult};
use crate::keyset::KeySet;
use crate::reader::RowReader;
use contacts_model::catalog::kinds_of;
use contacts_model::{Contact, Field, INTERNAL_COLUMNS, Kind, RowRequest, RowSource, columns};
use contacts_where::{Value, Where};
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

/// A contact query against a row source
#[derive(Clone)]
pub struct Query {
    source: Arc<dyn RowSource>,
    config: Arc<AggregationConfig>,
    default_where: Option<Where>,
    kind_wheres: IndexMap<Kind, Where>,
    include: IndexSet<Field>,
    union: Option<Vec<Query>>,
    sort_order: Field,
}

impl Query {
    /// Create an unconstrained query including every field, ordered by display name
    pub fn new(source: Arc<dyn RowSource>) -> Self {
        Self {
            source,
            config: Arc::new(AggregationConfig::default()),
            default_where: None,
            kind_wheres: IndexMap::new(),
            include: Field::ALL.into_iter().collect(),
            union: None,
            sort_order: Field::DisplayName,
        }
    }

    /// Replace the aggregation configuration
    pub fn with_config(mut self, config: impl Into<Arc<AggregationConfig>>) -> Self {
        self.config = config.into();
        self
    }

    /// Require `field` to contain `value`
    pub fn where_contains(self, field: Field, value: impl Into<Value>) -> QueryResult<Self> {
        let value = value.into();
        self.constrain(field, Where::contains(field.column(), value))
    }

    /// Require `field` to start with `value`
    pub fn where_starts_with(self, field: Field, value: impl Into<Value>) -> QueryResult<Self> {
        let value = value.into();
        self.constrain(field, Where::starts_with(field.column(), value))
    }

    /// Require `field` to equal `value`
    pub fn where_equal_to(self, field: Field, value: impl Into<Value>) -> QueryResult<Self> {
        self.constrain(field, Where::equal_to(field.column(), value))
    }

    /// Require `field` to differ from `value`
    pub fn where_not_equal_to(self, field: Field, value: impl Into<Value>) -> QueryResult<Self> {
        self.constrain(field, Where::not_equal_to(field.column(), value))
    }

    /// Only return contacts that have at least one phone number
    pub fn has_phone_number(mut self) -> QueryResult<Self> {
        self.ensure_not_union("has_phone_number")?;
        let condition = Where::not_equal_to(columns::HAS_PHONE_NUMBER, 0);
        self.default_where = Some(Where::and_maybe(self.default_where.take(), condition));
        Ok(self)
    }

    /// Restrict the attributes read into each contact. Replaces any earlier set.
    pub fn include<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.include = fields.into_iter().collect();
        self
    }

    /// Order the result by `field` instead of the display name
    pub fn sort_order(mut self, field: Field) -> Self {
        self.sort_order = field;
        self
    }

    /// Turn this query into the union of `children`.
    ///
    /// The result holds every contact matched by at least one child, each
    /// once. Constraints already set on this query are dropped, and adding
    /// constraints afterwards fails.
    pub fn or<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Query>,
    {
        if self.default_where.is_some() || !self.kind_wheres.is_empty() {
            warn!("or: dropping constraints already set on the parent query");
            self.default_where = None;
            self.kind_wheres.clear();
        }
        self.union = Some(children.into_iter().collect());
        self
    }

    /// Whether this query is an `or` union
    pub fn is_union(&self) -> bool {
        self.union.is_some()
    }

    /// Fields read into each contact
    pub fn included(&self) -> &IndexSet<Field> {
        &self.include
    }

    /// Run the query
    pub fn find(&self) -> QueryResult<Vec<Contact>> {
        self.find_with(|contact| contact)
    }

    /// Run the query and map every contact through `transform`
    pub fn find_with<T, F>(&self, transform: F) -> QueryResult<Vec<T>>
    where
        F: FnMut(Contact) -> T,
    {
        let keys = self.candidate_keys()?;
        if keys.is_empty() {
            debug!("no candidate keys, skipping final read");
            return Ok(Vec::new());
        }

        let request = self.final_request(&keys)?;
        let mut aggregator = Aggregator::new(&self.config);
        let rows = RowReader::new(self.source.as_ref()).scan(&request, |row| aggregator.fold(row))?;
        debug!("aggregated {} rows into {} contacts", rows, aggregator.len());

        Ok(aggregator.finish().into_iter().map(transform).collect())
    }

    fn ensure_not_union(&self, what: &str) -> QueryResult<()> {
        if self.is_union() {
            return Err(QueryError::invalid_argument(format!(
                "cannot add {} to an or-union query",
                what
            )));
        }
        Ok(())
    }

    fn constrain(mut self, field: Field, condition: Where) -> QueryResult<Self> {
        self.ensure_not_union(field.name())?;
        match field.kind() {
            None => {
                self.default_where = Some(Where::and_maybe(self.default_where.take(), condition));
            }
            Some(kind) => match self.kind_wheres.entry(kind) {
                Entry::Occupied(mut entry) => {
                    let combined = entry.get().clone().and(condition);
                    entry.insert(combined);
                }
                Entry::Vacant(entry) => {
                    entry.insert(condition);
                }
            },
        }
        Ok(self)
    }

    /// Keys the final read is restricted to
    fn candidate_keys(&self) -> QueryResult<KeySet> {
        match &self.union {
            Some(children) => Self::union_keys(children),
            None => self.own_keys(false),
        }
    }

    fn union_keys(children: &[Query]) -> QueryResult<KeySet> {
        let mut keys = KeySet::none();
        for child in children {
            let child_keys = match &child.union {
                Some(grandchildren) => Self::union_keys(grandchildren)?,
                None => child.own_keys(true)?,
            };
            keys = keys.union(child_keys);
            if keys.is_all() {
                break;
            }
        }
        if let Some(resolved) = keys.keys() {
            debug!("union of {} queries: {} keys", children.len(), resolved.len());
        }
        Ok(keys)
    }

    /// Resolve this query's own constraints to keys. The kind-independent
    /// filter is only resolved here when it cannot go into the final read.
    fn own_keys(&self, with_default: bool) -> QueryResult<KeySet> {
        let reader = RowReader::new(self.source.as_ref());
        let mut keys = KeySet::All;

        if let Some(default_where) = self.default_where.as_ref().filter(|_| with_default) {
            keys = keys.intersect(reader.read_keys(default_where.clone())?);
            if keys.is_empty() {
                return Ok(keys);
            }
        }

        for (kind, kind_where) in &self.kind_wheres {
            let selection = Where::equal_to(columns::MIMETYPE, kind.tag()).and(kind_where.clone());
            keys = keys.intersect(reader.read_keys(selection)?);
            if keys.is_empty() {
                debug!("{} filter matched no contacts", kind);
                return Ok(keys);
            }
        }
        Ok(keys)
    }

    fn final_request(&self, keys: &KeySet) -> QueryResult<RowRequest> {
        let sort_column = self.sort_order.column();
        let projection = INTERNAL_COLUMNS
            .iter()
            .copied()
            .chain([sort_column])
            .chain(self.include.iter().flat_map(|field| field.columns().iter().copied()));

        let mut conditions = Vec::new();
        if !self.is_union() {
            conditions.extend(self.default_where.clone());
        }
        if let Some(keys) = keys.keys() {
            conditions.push(Where::in_list(columns::CONTACT_ID, keys.iter().copied())?);
        }
        let kinds = kinds_of(&self.include);
        if !kinds.is_empty() {
            conditions.push(Where::in_list(columns::MIMETYPE, kinds.iter().map(Kind::tag))?);
        }

        let mut request = RowRequest::new()
            .with_projection(projection)
            .with_sort_order(sort_column);
        if let Some(selection) = Where::all(conditions) {
            request = request.with_selection(selection);
        }
        Ok(request)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("default_where", &self.default_where.as_ref().map(Where::render))
            .field("kind_wheres", &self.kind_wheres)
            .field("include", &self.include)
            .field("union", &self.union)
            .field("sort_order", &self.sort_order)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
