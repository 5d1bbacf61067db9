// quillsql-core/src/domain/templates.rs

//! Fixed prompt templates (minijinja syntax).

/// System turn of `text-to-sql`. Context: `ddl`.
pub const TEXT_TO_SQL_SYSTEM: &str = "You are an expert SQL developer. Given a database schema (DDL) and a natural language question, generate a SQL query that answers the question.

Rules:
1. Only use tables and columns that exist in the provided schema
2. Generate syntactically correct SQL
3. Return ONLY the SQL query, no explanations or markdown
4. Use appropriate JOINs when querying multiple tables
5. Include proper WHERE clauses, ORDER BY, GROUP BY as needed
6. Use standard SQL syntax that works across most databases

Database Schema:
{{ ddl }}";

/// Human turn of `text-to-sql`. Context: `question`.
pub const TEXT_TO_SQL_HUMAN: &str = "Generate a SQL query that: {{ question }}";

/// Single-turn SQLite prompt of `query-data`. Context: `top_k`, `table_info`, `input`.
pub const SQLITE_QUERY: &str = "You are a SQLite expert. Given an input question, first create a syntactically correct SQLite query to run, then look at the results of the query and return the answer to the input question.
Unless the user specifies in the question a specific number of examples to obtain, query for at most {{ top_k }} results using the LIMIT clause as per SQLite. You can order the results to return the most informative data in the database.
Never query for all columns from a table. You must query only the columns that are needed to answer the question. Wrap each column name in double quotes (\") to denote them as delimited identifiers.
Pay attention to use only the column names you can see in the tables below. Be careful to not query for columns that do not exist. Also, pay attention to which column is in which table.
Pay attention to use date('now') function to get the current date, if the question involves \"today\".

Use the following format:

Question: Question here
SQLQuery: SQL Query to run
SQLResult: Result of the SQLQuery
Answer: Final answer here

Only use the following tables:
{{ table_info }}

Question: {{ input }}";

/// Answer synthesis prompt. Context: `question`, `sql_query`, `sql_result`.
pub const ANSWER: &str = "Given the following user question, corresponding SQL query, and SQL result, answer the user question.

Question: {{ question }}
SQL Query: {{ sql_query }}
SQL Result: {{ sql_result }}

Answer:";
