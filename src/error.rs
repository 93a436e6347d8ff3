use thiserror::Error;

/// リスト操作で発生するエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// 範囲外のインデックスが渡された
    #[error("index out of range: {index} (size: {size})")]
    IndexOutOfRange { index: usize, size: usize },

    /// 走査が末尾に達した後にnextが呼ばれた
    #[error("iteration has no more elements")]
    ExhaustedIteration,
}

pub type Result<T> = std::result::Result<T, ListError>;
