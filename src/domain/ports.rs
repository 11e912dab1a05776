/// 擁有單一資源、可明確釋放的型別
///
/// `release` 必須可重複呼叫：只有第一次真正釋放並回傳 `true`。
pub trait Release {
    fn release(&mut self) -> bool;
    fn is_released(&self) -> bool;
}

pub trait ConfigProvider {
    fn config_path(&self) -> Option<&str>;
    fn removals(&self) -> &[String];
    fn json_output(&self) -> bool;
}
