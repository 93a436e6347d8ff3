/// 32bitのハッシュ値を返すインタフェース
///
/// `std::hash::Hash`とは異なり、値そのものから決定的に計算される
/// 等しい値は等しいハッシュ値を返さなければならない
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

macro_rules! impl_hash_code_narrow {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                fn hash_code(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

macro_rules! impl_hash_code_wide {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                // 上位32bitと下位32bitのxor
                fn hash_code(&self) -> i32 {
                    let v = *self as u64;
                    (v ^ (v >> 32)) as i32
                }
            }
        )*
    };
}

impl_hash_code_narrow!(i8, i16, i32, u8, u16, u32);
impl_hash_code_wide!(i64, u64, isize, usize);

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl HashCode for char {
    fn hash_code(&self) -> i32 {
        *self as i32
    }
}

/// UTF-16の符号単位ごとに h = 31 * h + c
impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

/// 値が存在しない場合は0
impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, |x| x.hash_code())
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Box<T> {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitives() {
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!((-1i32).hash_code(), -1);
        assert_eq!(7u8.hash_code(), 7);
        assert_eq!('a'.hash_code(), 97);
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!((1i64 << 32).hash_code(), 1);
    }

    #[test]
    fn test_str() {
        assert_eq!("".hash_code(), 0);
        assert_eq!("a".hash_code(), 97);
        assert_eq!("ab".hash_code(), 31 * 97 + 98);
        assert_eq!("hello".hash_code(), 99162322);
        assert_eq!(String::from("hello").hash_code(), "hello".hash_code());
    }

    #[test]
    fn test_option() {
        assert_eq!(None::<i32>.hash_code(), 0);
        assert_eq!(Some(5).hash_code(), 5);
        assert_eq!(Box::new(Some('a')).hash_code(), 97);
    }
}
