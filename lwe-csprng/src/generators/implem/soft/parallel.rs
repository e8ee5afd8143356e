use super::*;
use crate::generators::{
    BytesPerChild, ChildrenCount, ForkError, ParallelRandomGenerator, RandomGenerator,
};
use rayon::prelude::*;

impl ParallelRandomGenerator for SoftwareRandomGenerator {
    type ParChildrenIter = rayon::vec::IntoIter<SoftwareRandomGenerator>;

    fn par_try_fork(
        &mut self,
        n_children: ChildrenCount,
        n_bytes: BytesPerChild,
    ) -> Result<Self::ParChildrenIter, ForkError> {
        // Forking only hands out index ranges, the children are cheap to build sequentially.
        let children: Vec<_> = self.try_fork(n_children, n_bytes)?.collect();
        Ok(children.into_par_iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seeders::Seed;

    #[test]
    fn par_fork_matches_sequential_fork() {
        let mut parallel = SoftwareRandomGenerator::new(Seed(7));
        let mut sequential = SoftwareRandomGenerator::new(Seed(7));
        let par_bytes: Vec<Vec<u8>> = parallel
            .par_try_fork(ChildrenCount(8), BytesPerChild(40))
            .unwrap()
            .map(|child| child.collect())
            .collect();
        let seq_bytes: Vec<Vec<u8>> = sequential
            .try_fork(ChildrenCount(8), BytesPerChild(40))
            .unwrap()
            .map(|child| child.collect())
            .collect();
        assert_eq!(par_bytes, seq_bytes);
    }
}
