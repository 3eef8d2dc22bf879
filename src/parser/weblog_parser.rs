//! WeblogParser - combined 格式访问日志的单行解析器
//!
//! 提供了 [`LineParser`] trait 及其唯一实现 [`WeblogParser`]，
//! 以及把一串已切分好的行转换为 [`LogRecord`] 流的适配器 [`Records`]。

use crate::error::ParseError;
use crate::parser::parse_functions::{parse_line_bytes, parse_line_str};
use crate::record::LogRecord;
use crate::sink::{DiagnosticSink, TracingSink};

/// 单行解析能力
///
/// 行的读取、切分、解压都由调用方负责，实现只处理一行。
pub trait LineParser {
    /// 解析一行
    ///
    /// # 返回
    ///
    /// * `Ok(Some(record))` - 解析成功
    /// * `Ok(None)` - 行格式或时间无法识别，已写入一条警告，调用方应跳过该行
    /// * `Err(ParseError::InvalidEncoding)` - 输入不是 UTF-8，调用方的前置条件被破坏
    fn parse_line(&self, line: &[u8]) -> Result<Option<LogRecord>, ParseError>;

    /// 把一串行转换为记录流，跳过无法解析的行
    ///
    /// # 示例
    ///
    /// ```
    /// use weblog_parser::{LineParser, WeblogParser};
    ///
    /// let lines = [
    ///     r#"10.0.0.1 - - [10/Oct/2023:13:55:36 -0700] "GET / HTTP/1.1" 200 1 "-" "-""#,
    ///     "garbage",
    ///     r#"10.0.0.2 - - [10/Oct/2023:13:55:37 -0700] "GET / HTTP/1.1" 200 1 "-" "-""#,
    /// ];
    ///
    /// let parser = WeblogParser::new();
    /// let hosts: Vec<String> = parser
    ///     .parse_lines(lines)
    ///     .map(|r| r.unwrap().host)
    ///     .collect();
    ///
    /// assert_eq!(hosts, vec!["10.0.0.1", "10.0.0.2"]);
    /// ```
    fn parse_lines<I>(&self, lines: I) -> Records<'_, Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        Records {
            parser: self,
            lines: lines.into_iter(),
        }
    }
}

/// combined 格式解析器
///
/// 不持有可变状态，诊断写入构造时传入的接收端。
///
/// # 类型参数
///
/// * `S` - 诊断接收端，默认为 [`TracingSink`]
///
/// # 示例
///
/// ```
/// use weblog_parser::{LineParser, MemorySink, WeblogParser};
///
/// let parser = WeblogParser::with_sink(MemorySink::new());
///
/// assert_eq!(parser.parse_line(b"not a log line"), Ok(None));
/// assert_eq!(parser.sink().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeblogParser<S = TracingSink> {
    sink: S,
}

impl WeblogParser {
    /// 创建使用 `tracing` 输出诊断的解析器
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: DiagnosticSink> WeblogParser<S> {
    /// 使用调用方提供的诊断接收端创建解析器
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// 严格解析：不写诊断，所有失败都以错误返回
    pub fn try_parse_line(&self, line: &[u8]) -> Result<LogRecord, ParseError> {
        parse_line_bytes(line)
    }
}

impl<S: DiagnosticSink> LineParser for WeblogParser<S> {
    fn parse_line(&self, line: &[u8]) -> Result<Option<LogRecord>, ParseError> {
        self.report(line, parse_line_bytes(line))
    }
}

impl<S: DiagnosticSink> WeblogParser<S> {
    /// 解析已经是文本的一行，无法识别时写一条警告并返回 `None`
    pub fn parse_str(&self, line: &str) -> Option<LogRecord> {
        // &str 不会产生编码错误
        self.report(line.as_bytes(), parse_line_str(line)).ok().flatten()
    }

    /// 可跳过的错误写入诊断并转换为 `Ok(None)`，其余错误原样返回
    ///
    /// 诊断中回显原始字节，非 ASCII 与控制字符按 `\xNN`、`\r`、`\n` 转义。
    fn report(
        &self,
        line: &[u8],
        result: Result<LogRecord, ParseError>,
    ) -> Result<Option<LogRecord>, ParseError> {
        match result {
            Ok(record) => Ok(Some(record)),
            Err(ParseError::UnrecognizedLineFormat { .. }) => {
                self.sink
                    .warn(&format!("Cannot parse line [{}]", line.escape_ascii()));
                Ok(None)
            }
            Err(ParseError::UnparsableTimestamp { .. }) => {
                self.sink.warn(&format!(
                    "Cannot parse timestamp from line [{}]",
                    line.escape_ascii()
                ));
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// 行到记录的迭代器适配器
///
/// 由 [`LineParser::parse_lines`] 创建。无法解析的行被跳过（诊断已由解析器写出），
/// 编码错误作为 `Err` 产出，调用方可以决定是否继续。
pub struct Records<'p, P, I> {
    parser: &'p P,
    lines: I,
}

impl<P, I> Iterator for Records<'_, P, I>
where
    P: LineParser,
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Item = Result<LogRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match self.parser.parse_line(line.as_ref()) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}
