//! 进程执行接口（输出端口）

use crate::domain::error::Result;
use crate::domain::models::Invocation;

/// 子进程执行器
///
/// 标准流全部继承父进程，工具的输出原样呈现给用户。
pub trait ProcessRunner: Send + Sync {
    /// 执行调用并等待结束，返回退出码
    fn run(&self, invocation: &Invocation) -> Result<i32>;

    /// 运行 `program args` 并捕获第一行输出（用于版本探测）
    ///
    /// 程序不存在时返回 `Ok(None)`
    fn probe(&self, program: &str, args: &[String]) -> Result<Option<String>>;
}
