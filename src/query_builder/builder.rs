use sqlx::{Postgres, QueryBuilder};

use super::{FilterPredicate, Join, PageRequest};
use crate::constants::{columns, tables, MEMBER_TEAM_PROJECTION, TOTAL_COUNT_COLUMN};

/// Parametrized SELECT assembly for search queries.
///
/// Filter operands are always bound as parameters; only identifiers and the
/// integer window are written into the statement text.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    base_table: String,
    select_fields: Vec<String>,
    joins: Vec<Join>,
    filter: FilterPredicate,
    order_by: Vec<String>,
    pagination: Option<PageRequest>,
    with_total_count: bool,
}

impl SelectQuery {
    /// Create a new query for the given `table alias`
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            select_fields: vec!["*".to_string()],
            joins: Vec::new(),
            filter: FilterPredicate::match_all(),
            order_by: Vec::new(),
            pagination: None,
            with_total_count: false,
        }
    }

    /// members m LEFT JOIN teams t, projected to the member/team row shape
    pub fn member_team(filter: FilterPredicate) -> Self {
        Self::new(&format!("{} {}", tables::MEMBERS, tables::MEMBER_ALIAS))
            .select(MEMBER_TEAM_PROJECTION)
            .join(Join::member_team())
            .filter(filter)
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Replace the WHERE predicate
    pub fn filter(mut self, filter: FilterPredicate) -> Self {
        self.filter = filter;
        self
    }

    /// Add ORDER BY clause
    pub fn order_by(mut self, field: &str, direction: &str) -> Self {
        self.order_by.push(format!("{} {}", field, direction));
        self
    }

    /// Add ORDER BY ASC
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, "ASC")
    }

    /// Add ORDER BY DESC
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, "DESC")
    }

    /// Order by member id so consecutive windows never overlap
    pub fn stable_order(self) -> Self {
        self.order_asc(columns::MEMBER_ID)
    }

    /// Add LIMIT/OFFSET
    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }

    /// Add `COUNT(*) OVER ()` so each row carries the pre-window total
    pub fn with_total_count(mut self) -> Self {
        self.with_total_count = true;
        self
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn predicate(&self) -> &FilterPredicate {
        &self.filter
    }

    /// Derive the count statement for the same filter.
    ///
    /// Ordering and the window are dropped, and so is every join that neither
    /// the filter reads from nor could change the row count.
    pub fn count_query(&self) -> SelectQuery {
        let joins = self
            .joins
            .iter()
            .filter(|join| !join.is_count_neutral() || self.filter.references(&join.alias))
            .cloned()
            .collect();

        SelectQuery {
            base_table: self.base_table.clone(),
            select_fields: vec!["COUNT(*) AS count".to_string()],
            joins,
            filter: self.filter.clone(),
            order_by: Vec::new(),
            pagination: None,
            with_total_count: false,
        }
    }

    /// Build the executable query with all operands bound
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new("SELECT ");

        let mut fields = self.select_fields.join(", ");
        if self.with_total_count {
            fields.push_str(&format!(", COUNT(*) OVER () AS {TOTAL_COUNT_COLUMN}"));
        }
        query.push(fields);

        query.push(format!(" FROM {}", self.base_table));

        for join in &self.joins {
            query.push(" ");
            query.push(join.to_sql());
        }

        self.filter.push_where(&mut query);

        if !self.order_by.is_empty() {
            query.push(format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(ref pagination) = self.pagination {
            query.push(pagination.to_sql());
        }

        query
    }

    /// Statement text with numbered placeholders, for logging
    pub fn sql(&self) -> String {
        self.build().sql().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::{Condition, JoinCardinality};

    #[test]
    fn test_member_team_listing() {
        let query = SelectQuery::member_team(FilterPredicate::match_all());
        assert_eq!(
            query.sql(),
            "SELECT m.member_id, m.username, m.age, t.team_id, t.name AS team_name \
             FROM members m LEFT JOIN teams t ON m.team_id = t.team_id"
        );
    }

    #[test]
    fn test_filtered_window() {
        let filter = FilterPredicate::and(vec![
            Condition::TeamNameEq("teamA".to_string()),
            Condition::AgeGoe(20),
        ]);
        let query = SelectQuery::member_team(filter)
            .stable_order()
            .paginate(PageRequest::new(1, 2).unwrap());

        let sql = query.sql();
        assert!(sql.ends_with(
            " WHERE t.name = $1 AND m.age >= $2 ORDER BY m.member_id ASC LIMIT 2 OFFSET 1"
        ));
        assert!(!sql.contains("teamA"));
    }

    #[test]
    fn test_total_count_window_function() {
        let query = SelectQuery::member_team(FilterPredicate::match_all())
            .with_total_count()
            .paginate(PageRequest::new(0, 10).unwrap());
        assert!(query
            .sql()
            .contains("t.name AS team_name, COUNT(*) OVER () AS total_count FROM members m"));
    }

    #[test]
    fn test_count_query_drops_unused_team_join() {
        let filter = FilterPredicate::and(vec![Condition::AgeLoe(30)]);
        let count = SelectQuery::member_team(filter)
            .stable_order()
            .paginate(PageRequest::new(10, 10).unwrap())
            .count_query();

        assert_eq!(
            count.sql(),
            "SELECT COUNT(*) AS count FROM members m WHERE m.age <= $1"
        );
    }

    #[test]
    fn test_count_query_keeps_filtered_team_join() {
        let filter = FilterPredicate::and(vec![Condition::TeamNameEq("teamB".to_string())]);
        let count = SelectQuery::member_team(filter).count_query();

        assert_eq!(
            count.sql(),
            "SELECT COUNT(*) AS count FROM members m \
             LEFT JOIN teams t ON m.team_id = t.team_id WHERE t.name = $1"
        );
    }

    #[test]
    fn test_count_query_keeps_fan_out_join() {
        let query = SelectQuery::new("teams t").join(
            Join::left("members", "m", "m.team_id = t.team_id")
                .with_cardinality(JoinCardinality::OneToMany),
        );
        assert_eq!(query.count_query().joins().len(), 1);
    }
}
