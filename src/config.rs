/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 种子数据文件路径
    pub seed_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed_file: "trivia.toml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: std::env::var("TRIVIA_HOST").unwrap_or(default.host),
            port: std::env::var("TRIVIA_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.port),
            seed_file: std::env::var("TRIVIA_SEED_FILE").unwrap_or(default.seed_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
