use super::arena::Arena;
use super::BoundaryError;
use crate::prelude::{
    CleartextF64, CleartextKind, CleartextVectorF64, CleartextVectorKind, EntityKindMarker,
    LweCiphertext64, LweCiphertextKind, LweCiphertextVector64, LweCiphertextVectorKind,
    LweSecretKey64, LweSecretKeyKind, Plaintext64, PlaintextKind, PlaintextVector64,
    PlaintextVectorKind,
};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// An opaque reference to an object owned by a [`HandleEngine`](super::HandleEngine).
///
/// The kind parameter is the kind of the referenced entity. A handle is only meaningful for the
/// engine that created it, and becomes dead once the object is consumed or discarded.
pub struct Handle<Kind: EntityKindMarker> {
    pub(crate) engine_id: u64,
    pub(crate) index: usize,
    _kind: PhantomData<Kind>,
}

impl<Kind: EntityKindMarker> Handle<Kind> {
    pub(crate) fn new(engine_id: u64, index: usize) -> Self {
        Handle {
            engine_id,
            index,
            _kind: PhantomData,
        }
    }
}

impl<Kind: EntityKindMarker> Clone for Handle<Kind> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Kind: EntityKindMarker> Copy for Handle<Kind> {}

impl<Kind: EntityKindMarker> PartialEq for Handle<Kind> {
    fn eq(&self, other: &Self) -> bool {
        self.engine_id == other.engine_id && self.index == other.index
    }
}

impl<Kind: EntityKindMarker> Eq for Handle<Kind> {}

impl<Kind: EntityKindMarker> Hash for Handle<Kind> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.engine_id.hash(state);
        self.index.hash(state);
    }
}

impl<Kind: EntityKindMarker> Debug for Handle<Kind> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &std::any::type_name::<Kind>())
            .field("engine_id", &self.engine_id)
            .field("index", &self.index)
            .finish()
    }
}

pub type CleartextHandle = Handle<CleartextKind>;
pub type CleartextVectorHandle = Handle<CleartextVectorKind>;
pub type PlaintextHandle = Handle<PlaintextKind>;
pub type PlaintextVectorHandle = Handle<PlaintextVectorKind>;
pub type SecretKeyHandle = Handle<LweSecretKeyKind>;
pub type CiphertextHandle = Handle<LweCiphertextKind>;
pub type CiphertextVectorHandle = Handle<LweCiphertextVectorKind>;

/// The arenas backing a [`HandleEngine`](super::HandleEngine), one per kind of object.
#[derive(Default)]
pub struct Arenas {
    cleartexts: Arena<CleartextF64>,
    cleartext_vectors: Arena<CleartextVectorF64>,
    plaintexts: Arena<Plaintext64>,
    plaintext_vectors: Arena<PlaintextVector64>,
    secret_keys: Arena<LweSecretKey64>,
    ciphertexts: Arena<LweCiphertext64>,
    ciphertext_vectors: Arena<LweCiphertextVector64>,
}

impl Arenas {
    /// Stores `value` and returns a handle to it, minted for engine `engine_id`.
    pub(crate) fn insert<Kind: HandleKind>(
        &mut self,
        engine_id: u64,
        value: Kind::Stored,
    ) -> Handle<Kind> {
        Handle::new(engine_id, Kind::arena_mut(self).insert(value))
    }

    pub(crate) fn get<Kind: HandleKind>(
        &self,
        engine_id: u64,
        handle: Handle<Kind>,
    ) -> Result<&Kind::Stored, BoundaryError> {
        check_owner(engine_id, handle)?;
        Kind::arena(self).get(handle.index)
    }

    pub(crate) fn take<Kind: HandleKind>(
        &mut self,
        engine_id: u64,
        handle: Handle<Kind>,
    ) -> Result<Kind::Stored, BoundaryError> {
        check_owner(engine_id, handle)?;
        Kind::arena_mut(self).take(handle.index)
    }

    pub(crate) fn discard<Kind: HandleKind>(
        &mut self,
        engine_id: u64,
        handle: Handle<Kind>,
    ) -> Result<(), BoundaryError> {
        check_owner(engine_id, handle)?;
        Kind::arena_mut(self).discard(handle.index)
    }

    pub(crate) fn live_count(&self) -> usize {
        self.cleartexts.live_count()
            + self.cleartext_vectors.live_count()
            + self.plaintexts.live_count()
            + self.plaintext_vectors.live_count()
            + self.secret_keys.live_count()
            + self.ciphertexts.live_count()
            + self.ciphertext_vectors.live_count()
    }
}

fn check_owner<Kind: EntityKindMarker>(
    engine_id: u64,
    handle: Handle<Kind>,
) -> Result<(), BoundaryError> {
    if handle.engine_id != engine_id {
        return Err(BoundaryError::UnknownHandle);
    }
    Ok(())
}

pub(crate) mod sealed {
    use super::{Arena, Arenas};

    pub trait HandleKindSealed {
        type Stored;

        fn arena(arenas: &Arenas) -> &Arena<Self::Stored>;

        fn arena_mut(arenas: &mut Arenas) -> &mut Arena<Self::Stored>;
    }
}

/// The kinds of objects that can be referred to by a [`Handle`].
pub trait HandleKind: EntityKindMarker + sealed::HandleKindSealed {}

macro_rules! handle_kind {
    ($($kind:ident => $stored:ident in $field:ident),+ $(,)?) => {
        $(
            impl sealed::HandleKindSealed for $kind {
                type Stored = $stored;

                fn arena(arenas: &Arenas) -> &Arena<$stored> {
                    &arenas.$field
                }

                fn arena_mut(arenas: &mut Arenas) -> &mut Arena<$stored> {
                    &mut arenas.$field
                }
            }

            impl HandleKind for $kind {}
        )+
    };
}

handle_kind! {
    CleartextKind => CleartextF64 in cleartexts,
    CleartextVectorKind => CleartextVectorF64 in cleartext_vectors,
    PlaintextKind => Plaintext64 in plaintexts,
    PlaintextVectorKind => PlaintextVector64 in plaintext_vectors,
    LweSecretKeyKind => LweSecretKey64 in secret_keys,
    LweCiphertextKind => LweCiphertext64 in ciphertexts,
    LweCiphertextVectorKind => LweCiphertextVector64 in ciphertext_vectors,
}
