use sqlx::{Postgres, QueryBuilder};

use crate::constants::{columns, tables};
use crate::models::MemberTeamRow;

/// Comparison operators available to search clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    Gte,
    Lte,
}

impl ComparisonOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Gte => ">=",
            ComparisonOperator::Lte => "<=",
        }
    }
}

/// A bindable clause operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
}

/// One clause of a conjunctive search filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    UsernameEq(String),
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
}

impl Condition {
    /// Qualified column the clause compares against
    pub fn column(&self) -> &'static str {
        match self {
            Condition::UsernameEq(_) => columns::MEMBER_USERNAME,
            Condition::TeamNameEq(_) => columns::TEAM_NAME,
            Condition::AgeGoe(_) | Condition::AgeLoe(_) => columns::MEMBER_AGE,
        }
    }

    /// Alias of the table the clause reads from
    pub fn table_alias(&self) -> &'static str {
        match self {
            Condition::TeamNameEq(_) => tables::TEAM_ALIAS,
            _ => tables::MEMBER_ALIAS,
        }
    }

    pub fn operator(&self) -> ComparisonOperator {
        match self {
            Condition::UsernameEq(_) | Condition::TeamNameEq(_) => ComparisonOperator::Eq,
            Condition::AgeGoe(_) => ComparisonOperator::Gte,
            Condition::AgeLoe(_) => ComparisonOperator::Lte,
        }
    }

    pub fn value(&self) -> SqlValue {
        match self {
            Condition::UsernameEq(v) | Condition::TeamNameEq(v) => SqlValue::Text(v.clone()),
            Condition::AgeGoe(v) | Condition::AgeLoe(v) => SqlValue::Int(*v),
        }
    }

    /// Evaluate against a projected row with SQL semantics: a comparison with a
    /// missing (NULL) team column never matches.
    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        match self {
            Condition::UsernameEq(v) => row.username == *v,
            Condition::TeamNameEq(v) => row.team_name.as_deref() == Some(v.as_str()),
            Condition::AgeGoe(v) => row.age >= *v,
            Condition::AgeLoe(v) => row.age <= *v,
        }
    }

    /// Append `column op $n` with the operand bound as a parameter
    pub fn push_sql(&self, query: &mut QueryBuilder<'static, Postgres>) {
        query.push(self.column());
        query.push(" ");
        query.push(self.operator().to_sql());
        query.push(" ");
        match self.value() {
            SqlValue::Text(text) => query.push_bind(text),
            SqlValue::Int(int) => query.push_bind(int),
        };
    }

    /// Render with a numbered placeholder, for logging
    pub fn to_sql(&self, placeholder: usize) -> String {
        format!(
            "{} {} ${}",
            self.column(),
            self.operator().to_sql(),
            placeholder
        )
    }
}

/// Conjunction of search clauses.
///
/// Clauses are only ever ANDed, so adding a clause can only narrow the match set.
/// An empty predicate matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPredicate {
    conditions: Vec<Condition>,
}

impl FilterPredicate {
    /// Predicate matching every row
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn and(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether any clause reads from the given table alias
    pub fn references(&self, table_alias: &str) -> bool {
        self.conditions
            .iter()
            .any(|c| c.table_alias() == table_alias)
    }

    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        self.conditions.iter().all(|c| c.matches(row))
    }

    /// Append ` WHERE a AND b ...`; nothing for an empty predicate
    pub fn push_where(&self, query: &mut QueryBuilder<'static, Postgres>) {
        for (i, condition) in self.conditions.iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            condition.push_sql(query);
        }
    }

    /// Render the predicate body with numbered placeholders, for logging
    pub fn to_sql(&self) -> String {
        if self.conditions.is_empty() {
            return "TRUE".to_string();
        }

        self.conditions
            .iter()
            .enumerate()
            .map(|(i, c)| c.to_sql(i + 1))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl FromIterator<Condition> for FilterPredicate {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}
