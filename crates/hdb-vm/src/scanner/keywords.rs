// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! SQL-92 reserved word lookup.
//!
//! An identifier becomes a reserved word only through an exact lowercase
//! match; the compiler lowers the flat match to a decision tree over the
//! leading bytes.

use crate::scanner::token::TokenKind;

/// Map an identifier lexeme to its reserved-word kind.
///
/// Returns [`TokenKind::Identifier`] when the lexeme is not reserved.
#[must_use]
pub(super) fn identifier_kind(lexeme: &str) -> TokenKind {
    match lexeme {
        "absolute" => TokenKind::Absolute,
        "action" => TokenKind::Action,
        "add" => TokenKind::Add,
        "after" => TokenKind::After,
        "all" => TokenKind::All,
        "allocate" => TokenKind::Allocate,
        "alter" => TokenKind::Alter,
        "and" => TokenKind::And,
        "any" => TokenKind::Any,
        "are" => TokenKind::Are,
        "array" => TokenKind::Array,
        "as" => TokenKind::As,
        "asc" => TokenKind::Asc,
        "assertion" => TokenKind::Assertion,
        "at" => TokenKind::At,
        "authorization" => TokenKind::Authorization,
        "before" => TokenKind::Before,
        "begin" => TokenKind::Begin,
        "between" => TokenKind::Between,
        "binary" => TokenKind::Binary,
        "bit" => TokenKind::Bit,
        "blob" => TokenKind::Blob,
        "boolean" => TokenKind::Boolean,
        "both" => TokenKind::Both,
        "breadth" => TokenKind::Breadth,
        "by" => TokenKind::By,
        "call" => TokenKind::Call,
        "cascade" => TokenKind::Cascade,
        "cascaded" => TokenKind::Cascaded,
        "case" => TokenKind::Case,
        "cast" => TokenKind::Cast,
        "catalog" => TokenKind::Catalog,
        "char" => TokenKind::Char,
        "character" => TokenKind::Character,
        "check" => TokenKind::Check,
        "clob" => TokenKind::Clob,
        "close" => TokenKind::Close,
        "collate" => TokenKind::Collate,
        "collation" => TokenKind::Collation,
        "column" => TokenKind::Column,
        "commit" => TokenKind::Commit,
        "condition" => TokenKind::Condition,
        "connect" => TokenKind::Connect,
        "connection" => TokenKind::Connection,
        "constraint" => TokenKind::Constraint,
        "constraints" => TokenKind::Constraints,
        "constructor" => TokenKind::Constructor,
        "continue" => TokenKind::Continue,
        "corresponding" => TokenKind::Corresponding,
        "create" => TokenKind::Create,
        "cross" => TokenKind::Cross,
        "cube" => TokenKind::Cube,
        "current" => TokenKind::Current,
        "current_date" => TokenKind::CurrentDate,
        "current_default_transform_group" => TokenKind::CurrentDefaultTransformGroup,
        "current_path" => TokenKind::CurrentPath,
        "current_role" => TokenKind::CurrentRole,
        "current_time" => TokenKind::CurrentTime,
        "current_timestamp" => TokenKind::CurrentTimestamp,
        "current_transform_group_for_type" => TokenKind::CurrentTransformGroupForType,
        "current_user" => TokenKind::CurrentUser,
        "cursor" => TokenKind::Cursor,
        "cycle" => TokenKind::Cycle,
        "data" => TokenKind::Data,
        "date" => TokenKind::Date,
        "day" => TokenKind::Day,
        "deallocate" => TokenKind::Deallocate,
        "dec" => TokenKind::Dec,
        "decimal" => TokenKind::Decimal,
        "declare" => TokenKind::Declare,
        "default" => TokenKind::Default,
        "deferrable" => TokenKind::Deferrable,
        "deferred" => TokenKind::Deferred,
        "delete" => TokenKind::Delete,
        "depth" => TokenKind::Depth,
        "deref" => TokenKind::Deref,
        "desc" => TokenKind::Desc,
        "describe" => TokenKind::Describe,
        "descriptor" => TokenKind::Descriptor,
        "deterministic" => TokenKind::Deterministic,
        "diagnostics" => TokenKind::Diagnostics,
        "disconnect" => TokenKind::Disconnect,
        "distinct" => TokenKind::Distinct,
        "do" => TokenKind::Do,
        "domain" => TokenKind::Domain,
        "double" => TokenKind::Double,
        "drop" => TokenKind::Drop,
        "dynamic" => TokenKind::Dynamic,
        "each" => TokenKind::Each,
        "else" => TokenKind::Else,
        "elseif" => TokenKind::Elseif,
        "end" => TokenKind::End,
        "end_exec" => TokenKind::EndExec,
        "equals" => TokenKind::EqualsKeyword,
        "escape" => TokenKind::Escape,
        "except" => TokenKind::Except,
        "exception" => TokenKind::Exception,
        "exec" => TokenKind::Exec,
        "execute" => TokenKind::Execute,
        "exists" => TokenKind::Exists,
        "exit" => TokenKind::Exit,
        "external" => TokenKind::External,
        "false" => TokenKind::False,
        "fetch" => TokenKind::Fetch,
        "first" => TokenKind::First,
        "float" => TokenKind::Float,
        "for" => TokenKind::For,
        "foreign" => TokenKind::Foreign,
        "found" => TokenKind::Found,
        "free" => TokenKind::Free,
        "from" => TokenKind::From,
        "full" => TokenKind::Full,
        "function" => TokenKind::Function,
        "general" => TokenKind::General,
        "get" => TokenKind::Get,
        "global" => TokenKind::Global,
        "go" => TokenKind::Go,
        "goto" => TokenKind::Goto,
        "grant" => TokenKind::Grant,
        "group" => TokenKind::Group,
        "grouping" => TokenKind::Grouping,
        "handle" => TokenKind::Handle,
        "having" => TokenKind::Having,
        "hold" => TokenKind::Hold,
        "hour" => TokenKind::Hour,
        "identity" => TokenKind::Identity,
        "if" => TokenKind::If,
        "immediate" => TokenKind::Immediate,
        "in" => TokenKind::In,
        "indicator" => TokenKind::Indicator,
        "initially" => TokenKind::Initially,
        "inner" => TokenKind::Inner,
        "inout" => TokenKind::Inout,
        "input" => TokenKind::Input,
        "insert" => TokenKind::Insert,
        "int" => TokenKind::Int,
        "integer" => TokenKind::Integer,
        "intersect" => TokenKind::Intersect,
        "interval" => TokenKind::Interval,
        "into" => TokenKind::Into,
        "is" => TokenKind::Is,
        "isolation" => TokenKind::Isolation,
        "join" => TokenKind::Join,
        "key" => TokenKind::Key,
        "language" => TokenKind::Language,
        "large" => TokenKind::Large,
        "last" => TokenKind::Last,
        "lateral" => TokenKind::Lateral,
        "leading" => TokenKind::Leading,
        "leave" => TokenKind::Leave,
        "left" => TokenKind::Left,
        "level" => TokenKind::Level,
        "like" => TokenKind::Like,
        "local" => TokenKind::Local,
        "localtime" => TokenKind::Localtime,
        "localtimestamp" => TokenKind::Localtimestamp,
        "locator" => TokenKind::Locator,
        "loop" => TokenKind::Loop,
        "map" => TokenKind::Map,
        "match" => TokenKind::Match,
        "method" => TokenKind::Method,
        "minute" => TokenKind::Minute,
        "modifies" => TokenKind::Modifies,
        "module" => TokenKind::Module,
        "month" => TokenKind::Month,
        "names" => TokenKind::Names,
        "national" => TokenKind::National,
        "natural" => TokenKind::Natural,
        "nchar" => TokenKind::Nchar,
        "nclob" => TokenKind::Nclob,
        "nesting" => TokenKind::Nesting,
        "new" => TokenKind::New,
        "next" => TokenKind::Next,
        "no" => TokenKind::No,
        "none" => TokenKind::None,
        "not" => TokenKind::Not,
        "null" => TokenKind::Null,
        "numeric" => TokenKind::Numeric,
        "object" => TokenKind::Object,
        "of" => TokenKind::Of,
        "old" => TokenKind::Old,
        "on" => TokenKind::On,
        "only" => TokenKind::Only,
        "open" => TokenKind::Open,
        "option" => TokenKind::Option,
        "or" => TokenKind::Or,
        "order" => TokenKind::Order,
        "ordinality" => TokenKind::Ordinality,
        "out" => TokenKind::Out,
        "outer" => TokenKind::Outer,
        "output" => TokenKind::Output,
        "overlaps" => TokenKind::Overlaps,
        "pad" => TokenKind::Pad,
        "parameter" => TokenKind::Parameter,
        "partial" => TokenKind::Partial,
        "path" => TokenKind::Path,
        "precision" => TokenKind::Precision,
        "prepare" => TokenKind::Prepare,
        "preserve" => TokenKind::Preserve,
        "primary" => TokenKind::Primary,
        "prior" => TokenKind::Prior,
        "privileges" => TokenKind::Privileges,
        "procedure" => TokenKind::Procedure,
        "public" => TokenKind::Public,
        "read" => TokenKind::Read,
        "reads" => TokenKind::Reads,
        "real" => TokenKind::Real,
        "recursive" => TokenKind::Recursive,
        "redo" => TokenKind::Redo,
        "ref" => TokenKind::Ref,
        "references" => TokenKind::References,
        "referencing" => TokenKind::Referencing,
        "relative" => TokenKind::Relative,
        "release" => TokenKind::Release,
        "repeat" => TokenKind::Repeat,
        "resignal" => TokenKind::Resignal,
        "restrict" => TokenKind::Restrict,
        "result" => TokenKind::Result,
        "return" => TokenKind::Return,
        "returns" => TokenKind::Returns,
        "revoke" => TokenKind::Revoke,
        "right" => TokenKind::Right,
        "role" => TokenKind::Role,
        "rollback" => TokenKind::Rollback,
        "rollup" => TokenKind::Rollup,
        "routine" => TokenKind::Routine,
        "row" => TokenKind::Row,
        "rows" => TokenKind::Rows,
        "savepoint" => TokenKind::Savepoint,
        "schema" => TokenKind::Schema,
        "scroll" => TokenKind::Scroll,
        "search" => TokenKind::Search,
        "second" => TokenKind::Second,
        "section" => TokenKind::Section,
        "select" => TokenKind::Select,
        "session" => TokenKind::Session,
        "session_user" => TokenKind::SessionUser,
        "set" => TokenKind::Set,
        "sets" => TokenKind::Sets,
        "signal" => TokenKind::Signal,
        "similar" => TokenKind::Similar,
        "size" => TokenKind::Size,
        "smallint" => TokenKind::Smallint,
        "some" => TokenKind::Some,
        "space" => TokenKind::Space,
        "specific" => TokenKind::Specific,
        "specifictype" => TokenKind::Specifictype,
        "sql" => TokenKind::Sql,
        "sqlexception" => TokenKind::Sqlexception,
        "sqlstate" => TokenKind::Sqlstate,
        "sqlwarning" => TokenKind::Sqlwarning,
        "start" => TokenKind::Start,
        "state" => TokenKind::State,
        "static" => TokenKind::Static,
        "system_user" => TokenKind::SystemUser,
        "table" => TokenKind::Table,
        "temporary" => TokenKind::Temporary,
        "then" => TokenKind::Then,
        "time" => TokenKind::Time,
        "timestamp" => TokenKind::Timestamp,
        "timezone_hour" => TokenKind::TimezoneHour,
        "timezone_minute" => TokenKind::TimezoneMinute,
        "to" => TokenKind::To,
        "trailing" => TokenKind::Trailing,
        "transaction" => TokenKind::Transaction,
        "translation" => TokenKind::Translation,
        "treat" => TokenKind::Treat,
        "trigger" => TokenKind::Trigger,
        "true" => TokenKind::True,
        "under" => TokenKind::Under,
        "undo" => TokenKind::Undo,
        "union" => TokenKind::Union,
        "unique" => TokenKind::Unique,
        "unknown" => TokenKind::Unknown,
        "unnest" => TokenKind::Unnest,
        "until" => TokenKind::Until,
        "update" => TokenKind::Update,
        "usage" => TokenKind::Usage,
        "user" => TokenKind::User,
        "using" => TokenKind::Using,
        "value" => TokenKind::Value,
        "values" => TokenKind::Values,
        "varchar" => TokenKind::Varchar,
        "varying" => TokenKind::Varying,
        "view" => TokenKind::View,
        "when" => TokenKind::When,
        "whenever" => TokenKind::Whenever,
        "where" => TokenKind::Where,
        "while" => TokenKind::While,
        "with" => TokenKind::With,
        "without" => TokenKind::Without,
        "work" => TokenKind::Work,
        "write" => TokenKind::Write,
        "year" => TokenKind::Year,
        "zone" => TokenKind::Zone,
        _ => TokenKind::Identifier,
    }
}
