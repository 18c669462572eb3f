// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Token definitions for the hdb query language.

/// A token produced by the scanner.
///
/// The text borrows from the source string (or, for error tokens, from a
/// static message); tokens never outlive the source they were scanned
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token kind.
    pub kind: TokenKind,
    /// The lexeme, or the error message for [`TokenKind::Error`].
    pub text: &'src str,
    /// The source line the token starts on.
    pub line: i32,
}

/// The kinds of tokens in the hdb query language.
///
/// Single- and multi-byte punctuation first, then literals and specials,
/// then the SQL-92 reserved words. An identifier only becomes a reserved
/// word through an exact lowercase match; enclosed identifiers never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `\`
    Backslash,
    /// `/`
    ForwardSlash,
    /// `*`
    Asterisk,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `=`
    Equals,
    /// `:`
    Colon,
    /// `?`
    QuestionMark,
    /// `^`
    Circumflex,
    /// `|`
    VerticalBar,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `!`
    Bang,
    /// `''` (double single-quote)
    DoubleQuote,
    /// `!=` or `<>`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// Number literal: integer with optional fraction
    Number,
    /// Single-quoted string literal, quotes included in the text
    String,
    /// Identifier that is not a reserved word
    Identifier,
    /// Back-tick- or double-quote-enclosed identifier
    EnclosedIdentifier,
    /// Scan error; the text is the message
    Error,
    /// End of input, returned forever once reached
    Eof,

    // SQL-92 reserved words
    Absolute, Action, Add, After, All, Allocate, Alter, And, Any, Are, Array,
    As, Asc, Assertion, At, Authorization, Before, Begin, Between, Binary, Bit,
    Blob, Boolean, Both, Breadth, By, Call, Cascade, Cascaded, Case, Cast, Catalog,
    Char, Character, Check, Clob, Close, Collate, Collation, Column, Commit,
    Condition, Connect, Connection, Constraint, Constraints, Constructor, Continue,
    Corresponding, Create, Cross, Cube, Current, CurrentDate, CurrentDefaultTransformGroup,
    CurrentPath, CurrentRole, CurrentTime, CurrentTimestamp, CurrentTransformGroupForType,
    CurrentUser, Cursor, Cycle, Data, Date, Day, Deallocate, Dec, Decimal, Declare,
    Default, Deferrable, Deferred, Delete, Depth, Deref, Desc, Describe, Descriptor,
    Deterministic, Diagnostics, Disconnect, Distinct, Do, Domain, Double, Drop,
    Dynamic, Each, Else, Elseif, End, EndExec, EqualsKeyword, Escape, Except,
    Exception, Exec, Execute, Exists, Exit, External, False, Fetch, First, Float,
    For, Foreign, Found, Free, From, Full, Function, General, Get, Global, Go,
    Goto, Grant, Group, Grouping, Handle, Having, Hold, Hour, Identity, If, Immediate,
    In, Indicator, Initially, Inner, Inout, Input, Insert, Int, Integer, Intersect,
    Interval, Into, Is, Isolation, Join, Key, Language, Large, Last, Lateral,
    Leading, Leave, Left, Level, Like, Local, Localtime, Localtimestamp, Locator,
    Loop, Map, Match, Method, Minute, Modifies, Module, Month, Names, National,
    Natural, Nchar, Nclob, Nesting, New, Next, No, None, Not, Null, Numeric,
    Object, Of, Old, On, Only, Open, Option, Or, Order, Ordinality, Out, Outer,
    Output, Overlaps, Pad, Parameter, Partial, Path, Precision, Prepare, Preserve,
    Primary, Prior, Privileges, Procedure, Public, Read, Reads, Real, Recursive,
    Redo, Ref, References, Referencing, Relative, Release, Repeat, Resignal,
    Restrict, Result, Return, Returns, Revoke, Right, Role, Rollback, Rollup,
    Routine, Row, Rows, Savepoint, Schema, Scroll, Search, Second, Section, Select,
    Session, SessionUser, Set, Sets, Signal, Similar, Size, Smallint, Some, Space,
    Specific, Specifictype, Sql, Sqlexception, Sqlstate, Sqlwarning, Start, State,
    Static, SystemUser, Table, Temporary, Then, Time, Timestamp, TimezoneHour,
    TimezoneMinute, To, Trailing, Transaction, Translation, Treat, Trigger, True,
    Under, Undo, Union, Unique, Unknown, Unnest, Until, Update, Usage, User,
    Using, Value, Values, Varchar, Varying, View, When, Whenever, Where, While,
    With, Without, Work, Write, Year, Zone,
}
