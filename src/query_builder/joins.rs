use crate::constants::{columns, tables};

/// Represents the SQL JOIN kinds the search queries use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
}

impl JoinType {
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// How many joined rows one base row can produce.
///
/// `OneToMany` joins fan out: a base row appears once per associated row, so
/// raw row counts overstate the number of distinct base records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinCardinality {
    ManyToOne,
    OneToMany,
}

impl JoinCardinality {
    pub fn fans_out(&self) -> bool {
        matches!(self, JoinCardinality::OneToMany)
    }
}

/// Represents a SQL JOIN clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub join_type: JoinType,
    pub table: String,
    pub alias: String,
    pub on_condition: String,
    pub cardinality: JoinCardinality,
}

impl Join {
    /// Create an INNER JOIN
    pub fn inner(table: &str, alias: &str, on_condition: &str) -> Self {
        Self {
            join_type: JoinType::Inner,
            table: table.to_string(),
            alias: alias.to_string(),
            on_condition: on_condition.to_string(),
            cardinality: JoinCardinality::ManyToOne,
        }
    }

    /// Create a LEFT JOIN
    pub fn left(table: &str, alias: &str, on_condition: &str) -> Self {
        Self {
            join_type: JoinType::Left,
            table: table.to_string(),
            alias: alias.to_string(),
            on_condition: on_condition.to_string(),
            cardinality: JoinCardinality::ManyToOne,
        }
    }

    pub fn with_cardinality(mut self, cardinality: JoinCardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// members m LEFT JOIN teams t: every member, team columns NULL when absent
    pub fn member_team() -> Self {
        Self::left(
            tables::TEAMS,
            tables::TEAM_ALIAS,
            &format!("{} = {}", columns::MEMBER_TEAM_ID, columns::TEAM_ID),
        )
    }

    /// A LEFT JOIN that cannot multiply base rows and is not filtered on can be
    /// dropped without changing the row count.
    pub fn is_count_neutral(&self) -> bool {
        self.join_type == JoinType::Left && !self.cardinality.fans_out()
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(
            "{} {} {} ON {}",
            self.join_type.to_sql(),
            self.table,
            self.alias,
            self.on_condition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_team_join() {
        let join = Join::member_team();
        assert_eq!(join.to_sql(), "LEFT JOIN teams t ON m.team_id = t.team_id");
        assert!(join.is_count_neutral());
    }

    #[test]
    fn test_inner_join() {
        let join = Join::inner("teams", "t", "m.team_id = t.team_id");
        assert_eq!(join.to_sql(), "INNER JOIN teams t ON m.team_id = t.team_id");
        assert!(!join.is_count_neutral());
    }

    #[test]
    fn test_fan_out_join_is_not_count_neutral() {
        let join = Join::left("members", "mm", "mm.team_id = t.team_id")
            .with_cardinality(JoinCardinality::OneToMany);
        assert!(join.cardinality.fans_out());
        assert!(!join.is_count_neutral());
    }
}
