//! Glue between domain entities and their SeaORM tables.

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{ActiveValue, ColumnTrait, Condition, DbErr, EntityTrait, SqlErr};

use studio_core::error::RepoError;
use studio_core::query::{Entity as DomainEntity, Filter, Value};

/// A SeaORM entity that stores one domain entity family.
pub trait MappedEntity: EntityTrait {
    type Domain: DomainEntity;

    /// Column backing a domain field.
    fn column(field: <Self::Domain as DomainEntity>::Field) -> Self::Column;
}

pub(crate) type FieldOf<E> = <<E as MappedEntity>::Domain as DomainEntity>::Field;

/// Zero means "not yet persisted" and lets the database assign the key.
pub(crate) fn identity(id: i32) -> ActiveValue<i32> {
    if id == 0 {
        ActiveValue::NotSet
    } else {
        ActiveValue::Set(id)
    }
}

pub(crate) fn repo_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg)) =
        err.sql_err()
    {
        return RepoError::Constraint(msg);
    }
    match &err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

/// Translates a filter into a SeaORM condition with the same three-valued
/// semantics as in-memory evaluation.
pub(crate) fn condition<E: MappedEntity>(filter: &Filter<FieldOf<E>>) -> Condition {
    let expr = match filter {
        Filter::All(parts) => {
            return parts
                .iter()
                .fold(Condition::all(), |acc, part| acc.add(condition::<E>(part)));
        }
        Filter::Any(parts) if parts.is_empty() => never(),
        Filter::Any(parts) => {
            return parts
                .iter()
                .fold(Condition::any(), |acc, part| acc.add(condition::<E>(part)));
        }
        Filter::Not(inner) => return condition::<E>(inner).not(),
        Filter::Eq(field, Value::Null) | Filter::IsNull(field) => E::column(*field).is_null(),
        Filter::Ne(field, Value::Null) => E::column(*field).is_not_null(),
        // Ordering against null is unknown, which never matches.
        Filter::Gt(_, Value::Null) | Filter::Lt(_, Value::Null) => never(),
        Filter::Eq(field, value) => E::column(*field).eq(sql_value(value)),
        Filter::Ne(field, value) => E::column(*field).ne(sql_value(value)),
        Filter::Gt(field, value) => E::column(*field).gt(sql_value(value)),
        Filter::Lt(field, value) => E::column(*field).lt(sql_value(value)),
        Filter::Contains(field, needle) => {
            let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
            Expr::expr(Func::lower(Expr::col((E::default(), E::column(*field)))))
                .like(LikeExpr::new(pattern).escape('\\'))
        }
        Filter::In(field, values) => {
            let values: Vec<sea_orm::Value> = values
                .iter()
                .filter(|value| !value.is_null())
                .map(sql_value)
                .collect();
            if values.is_empty() {
                never()
            } else {
                E::column(*field).is_in(values)
            }
        }
    };
    Condition::all().add(expr)
}

fn sql_value(value: &Value) -> sea_orm::Value {
    match value {
        Value::Null => sea_orm::Value::String(None),
        Value::Bool(b) => (*b).into(),
        Value::Int(n) => (*n).into(),
        Value::Text(s) => s.clone().into(),
        Value::Timestamp(ts) => ts.fixed_offset().into(),
    }
}

fn never() -> SimpleExpr {
    Expr::val(1).eq(0)
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn db_errors_map_to_repo_errors() {
        let err = repo_err(DbErr::RecordNotUpdated);
        assert!(matches!(err, RepoError::NotFound));

        let err = repo_err(DbErr::Custom("boom".into()));
        assert!(matches!(err, RepoError::Query(_)));
    }
}
