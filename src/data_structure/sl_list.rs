use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::interface::hash_code::HashCode;
use crate::interface::list::List;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    x: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(x: T, next: Link<T>) -> Self {
        Self { x, next }
    }
}

fn out_of_range(index: usize, size: usize) -> ListError {
    debug!("index {} is out of range (size {})", index, size);
    ListError::IndexOutOfRange { index, size }
}

/// Singly-Linked List(単方向連結リスト)
///
/// 各ノードは次のノードを排他的に所有する(前のノードへのリンクは持たない)
/// そのため循環参照は起こらず、RcやRefCellも必要ない
///
/// get(i),set(i,x),add(i,x),remove(i)はheadからi回リンクを辿るため
/// 実行時間はいずれもO(1 + i)
///
/// 値が存在しない要素を扱う場合は`SLList<Option<T>>`とする
pub struct SLList<T> {
    head: Link<T>,
    n: usize,
}

impl<T> SLList<T> {
    pub fn new() -> Self {
        Self { head: None, n: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 末尾にxを追加する
    ///
    /// 空の場合は新しいノードがheadになる
    /// それ以外はn-1番目のノードまで辿り、その後ろにつなぐ
    pub fn push_back(&mut self, x: T) {
        let node = Some(Box::new(Node::new(x, None)));
        match self.n.checked_sub(1).and_then(|last| self.get_node_mut(last)) {
            Some(last) => last.next = node,
            None => self.head = node,
        }
        self.n += 1;
        trace!("push_back: size {}", self.n);
    }

    pub fn get_mut(&mut self, i: usize) -> Result<&mut T> {
        let size = self.n;
        self.get_node_mut(i)
            .map(|node| &mut node.x)
            .ok_or_else(|| out_of_range(i, size))
    }

    /// xと等しい最初の要素のインデックスを返す
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|y| y == x)
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(x).is_some()
    }

    /// 全てのノードを先頭から一つずつ解放する
    ///
    /// Boxの再帰的なdropに任せると長いリストでスタックが溢れるため
    /// nextを切り離してから捨てる
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        if self.n > 0 {
            trace!("clear: released {} nodes", self.n);
        }
        self.n = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn get_node(&self, i: usize) -> Option<&Node<T>> {
        let mut p = self.head.as_deref();
        for _ in 0..i {
            p = p?.next.as_deref();
        }
        p
    }

    fn get_node_mut(&mut self, i: usize) -> Option<&mut Node<T>> {
        let mut p = self.head.as_deref_mut();
        for _ in 0..i {
            p = p?.next.as_deref_mut();
        }
        p
    }

    /// i番目のノードを所有しているリンクを返す
    ///
    /// i == 0 ならhead、それ以外はi-1番目のノードのnext
    /// i == n なら末尾のNoneを指すリンク、i > n ならNone
    fn link_mut(&mut self, i: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..i {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T> List<T> for SLList<T> {
    fn size(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize) -> Result<&T> {
        self.get_node(i)
            .map(|node| &node.x)
            .ok_or_else(|| out_of_range(i, self.n))
    }

    fn set(&mut self, i: usize, x: T) -> Result<T> {
        self.get_mut(i).map(|y| std::mem::replace(y, x))
    }

    fn add(&mut self, i: usize, x: T) -> Result<()> {
        let size = self.n;
        let link = self.link_mut(i).ok_or_else(|| out_of_range(i, size))?;
        let next = link.take();
        *link = Some(Box::new(Node::new(x, next)));
        self.n += 1;
        trace!("add: index {}, size {}", i, self.n);
        Ok(())
    }

    fn remove(&mut self, i: usize) -> Result<T> {
        let size = self.n;
        let link = self.link_mut(i).ok_or_else(|| out_of_range(i, size))?;
        // i == n の場合はlinkが末尾のNoneなので何も変更せずにエラーとなる
        let mut node = link.take().ok_or_else(|| out_of_range(i, size))?;
        *link = node.next.take();
        self.n -= 1;
        trace!("remove: index {}, size {}", i, self.n);
        Ok(node.x)
    }
}

impl<T> Default for SLList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SLList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SLList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        let mut link = &mut list.head;
        for x in self.iter() {
            let node = link.insert(Box::new(Node::new(x.clone(), None)));
            link = &mut node.next;
        }
        list.n = self.n;
        list
    }
}

/// `[x0, x1, ..., xn]`の形式で出力する
impl<T: Display> Display for SLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl<T: Debug> Debug for SLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "null");
        }
        write!(f, "head")?;
        for x in self.iter() {
            write!(f, " -> {:?}", x)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for SLList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SLList<T> {}

impl<T: Hash> Hash for SLList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.n);
        for x in self.iter() {
            x.hash(state);
        }
    }
}

/// 先頭から h = 31 * h + hash(x) を計算する(初期値は1)
impl<T: HashCode> HashCode for SLList<T> {
    fn hash_code(&self) -> i32 {
        self.iter()
            .fold(1i32, |h, x| h.wrapping_mul(31).wrapping_add(x.hash_code()))
    }
}

/// headから末尾に向かって一度だけ走査するカーソル
///
/// 生成時点のリストを借用するため、走査中にリストを変更することはできない
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// 次の要素を返してカーソルを進める
    ///
    /// 末尾に達している場合は`ListError::ExhaustedIteration`を返す
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(ListError::ExhaustedIteration)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.x
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SLList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T>(SLList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            self.0.remove(0).ok()
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SLList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
