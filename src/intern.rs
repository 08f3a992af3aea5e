use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use log::debug;

use crate::node::Node;
use crate::object::Object;

/// Lookup key of an interned object.
///
/// Sets are keyed by the addresses of their interned elements, sorted and deduplicated.
/// The table holds at most one handle per extensionally distinct object, so two sets
/// with equivalent elements have the same key.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
enum Key {
    Atom(String),
    Set(Vec<usize>),
}

#[derive(Default)]
struct Table {
    objects: HashMap<Key, Object>,
    /// Addresses of the handles in `objects`.
    members: HashSet<usize>,
}

/// Unique table of objects.
///
/// Objects built through an interner are shared: asking for an atom or a set that is
/// equivalent to one already in the table returns the existing handle instead of a new
/// allocation. A lookup costs time proportional to the cardinality of the set, not to
/// its depth.
///
/// Elements passed to [`Interner::set`] do not need to come from the interner; they are
/// interned first, so every sub-object of an interned set is interned as well.
#[derive(Default)]
pub struct Interner {
    table: RefCell<Table>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct objects in the table.
    pub fn len(&self) -> usize {
        self.table.borrow().objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.borrow().objects.is_empty()
    }

    pub fn atom(&self, name: impl Into<String>) -> Object {
        let name = name.into();
        self.put(Key::Atom(name.clone()), || Object::atom(name))
    }

    pub fn set<I>(&self, elements: I) -> Object
    where
        I: IntoIterator<Item = Object>,
    {
        let elements: Vec<Object> = elements.into_iter().map(|x| self.intern(x)).collect();
        self.put_set(elements)
    }

    /// Returns the canonical shared handle for `object`, adding it (and its sub-objects)
    /// to the table if it is new.
    pub fn intern(&self, object: Object) -> Object {
        if self.contains(&object) {
            return object;
        }

        // Interned handles of the sub-objects visited so far, by address.
        let mut done: HashMap<usize, Object> = HashMap::new();
        // Post-order walk with an explicit stack: (object, children already pushed).
        let mut stack: Vec<(Object, bool)> = vec![(object.clone(), false)];
        while let Some((x, expanded)) = stack.pop() {
            if done.contains_key(&x.addr()) {
                continue;
            }
            if self.contains(&x) {
                done.insert(x.addr(), x);
                continue;
            }
            let canonical = match x.node() {
                Node::Atom { name } => self.atom(name.as_str()),
                Node::Set { elements } if !expanded => {
                    stack.push((x.clone(), true));
                    stack.extend(elements.iter().map(|e| (e.clone(), false)));
                    continue;
                }
                Node::Set { elements } => {
                    let elements = elements.iter().filter_map(|e| done.get(&e.addr()).cloned()).collect();
                    self.put_set(elements)
                }
            };
            done.insert(x.addr(), canonical);
        }

        done.remove(&object.addr()).unwrap_or(object)
    }

    /// Whether `object` is itself a handle stored in the table.
    fn contains(&self, object: &Object) -> bool {
        self.table.borrow().members.contains(&object.addr())
    }

    /// Interns a set whose elements are all interned already.
    fn put_set(&self, elements: Vec<Object>) -> Object {
        let mut addrs: Vec<usize> = elements.iter().map(Object::addr).collect();
        addrs.sort_unstable();
        addrs.dedup();
        self.put(Key::Set(addrs), || Object::set(elements))
    }

    fn put(&self, key: Key, make: impl FnOnce() -> Object) -> Object {
        let mut table = self.table.borrow_mut();
        if let Some(existing) = table.objects.get(&key) {
            debug!("intern: hit {} at {:#x}", existing.kind(), existing.addr());
            return existing.clone();
        }
        let object = make();
        debug!("intern: new {} at {:#x}", object.kind(), object.addr());
        table.members.insert(object.addr());
        table.objects.insert(key, object.clone());
        object
    }
}

impl Debug for Interner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interner").field("size", &self.len()).finish()
    }
}
